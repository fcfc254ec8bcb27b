// Built-in job description every résumé is scored against.
// Overridden at startup by JOB_DESCRIPTION_FILE (see config).

/// Default role: Senior IT Director.
pub const DEFAULT_JOB_DESCRIPTION: &str = r#"Job Title: Senior IT Director

About the Role: We are seeking a highly skilled Senior IT Director to lead our technology team and participate in defining the strategic initiatives of IT within the organization. The ideal candidate will be responsible for overseeing the implementation of innovative technology solutions, ensuring the security, integrity, and efficiency of information systems at all organizational levels.

Responsibilities:

Lead and oversee the execution of IT strategies, focusing on system integration and information security.
Collaborate with internal teams to understand business needs and translate those requirements into technical solutions.
Supervise the implementation of critical systems, including secure communication networks, data management systems, and IT infrastructure.
Help the organization achieve certification and compliance in health information exchange networks and other federal and non-federal standards.
Manage large-scale IT projects using agile and lean methodologies to ensure on-time and on-budget delivery.
Coordinate the deployment of new software systems, management systems, and communication tools within the organization.
Ensure all privacy, security, and confidentiality policies are being properly followed.
Required Qualifications:

10+ years of experience in IT, with at least 5 years in leadership roles.
Proven experience in implementing IT systems in regulated environments such as healthcare or government sectors.
Expertise in secure network architecture, systems integration, and managing large volumes of data.
Experience with project management tools such as MS Project, JIRA, or other task tracking and version control systems.
Strong communication skills and the ability to work effectively with internal and external stakeholders.
Knowledge of agile frameworks and IT project management.
Preferred Skills:

Experience with cloud computing platforms such as AWS, Azure, or Google Cloud.
Familiarity with containerization technologies like Docker and Kubernetes.
Experience with database management and data analytics tools, including SQL and NoSQL.
"#;
