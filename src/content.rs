//! Static text shown on each page

pub const MENU_INTRO: &str = "Welcome to this speck of sand in the universe, pick an option below to learn more about the stardust that composes me.";

pub const ALREADY_HOME_NOTICE: &str = "Oops! You are already at the Home Page!";

pub const BACK_HINT: &str = "Press 'ESC' or 'b' to return to the home page.";

pub const QUIT_HINT: &str = "Press 'q' to quit.";

pub const ABOUT: &str = "\
[About Me]

## Who ##
\tA curious mind, a forever learner, a person built by empathy, and a swiss army knife technologist.
## Why ##
\tOnly child, early parent loss, isolation, a thirst for knowledge, a desire for belonging, a dedication to finding success.
## How ##
\tPersistence.
";

pub const EXPERIENCE: &str = "\
[Experience]

## Education ##
\tAssociates of Science - Computer Science - 2015
\tBachleors of Science - Information Technology - Network and Information Security - 2019

## Work ##
\tIT & Computer Programmer - Clinical Trial and Business Development Agency - 2018 - 2019
\t  -Data Systems Management - Salesforce, SharpSpring
\t  -Python Development - Web Scraping, Data Analysis
\t  -Network Administration - SOHO Routing, Wireless, Domain Admin - GoDaddy
\t  -M365 Administration - Email, Office365, M365 Admin Center
\t  -IT Support - Laptop, VoIP, Printer, TV/Digital Display - Break/Fix
\tField Service Engineer - Government Contractor - 2019 - 2022
\t  -IT Support - Laptop, VoIP, Printer, TV/Digital Display - Break/Fix
\t  -Networking - Enterprise Switch and Router maintainence
\t  -Windows Administration - Enterprise Windows Server 2012-2022 maintainence, Windows 10-11 maintainence
\t  -Powershell Automation - Automated tasks, for workstation builds, file share management, large scale break/fix solutions
\t  -Workstation Deployment - Large scale enterprise scheduling, building and deployment of workstations
\tNetwork Deployment Engineer - Government Contractor - 2022
\t  -Networking - Cisco Enterprise Routers and Switches configuration, remediation, patching
\t  -Inventory Management - Cisco Vendor quotes, build of materials, purchase, and deployment of networking equipment
\t  -Field Deployment - Planning, Scheduling, Execution of network deployment for new sites, refreshed sites, emergency response sites
\t  -Protocols - BGP, EIGRP, SDWAN, Layer2 Vlan Routing, LACP Trunks, SFP, qSFP Fiber and Ethernet
\tIT Special in InfoSec - Federal Employee - 2022 - Present
\t  -Team Lead - Active Directory, Windows Systems Engineering, Platform Engineering
\t  -Planning, Scheduling, Execution of business requirements
\t  -Configuration Management - STIG Compliance, Golden Image, Cloud Pipeline Configuration, DevSecOps
\t  -Vulnerability Management - Enterprise remediation efforts via powershell automation and configuration manager device management
\t  -Budgetary - Inquire, Trial, Purchase new products to improve enterprise infrastructure management and engineering
\t  -Swiss Army Knife, Jack of All Trades
";

pub const CONTACT: &str = "\
[Contact]

E-Mail -> maintainentropicprivacy@gmail.com
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_start_with_heading() {
        assert!(ABOUT.starts_with("[About Me]\n\n"));
        assert!(EXPERIENCE.starts_with("[Experience]\n\n"));
        assert!(CONTACT.starts_with("[Contact]\n\n"));
    }

    #[test]
    fn test_blocks_end_with_newline() {
        for block in [ABOUT, EXPERIENCE, CONTACT] {
            assert!(block.ends_with('\n'));
            assert!(!block.ends_with("\n\n"));
        }
    }

    #[test]
    fn test_blocks_keep_tab_indentation() {
        assert!(ABOUT.contains("\n\tPersistence.\n"));
        assert!(EXPERIENCE.contains("- 2019\n\n## Work ##\n"));
    }
}
