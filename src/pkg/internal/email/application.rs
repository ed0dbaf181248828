use std::fmt::{self, Display};

use super::{Mailer, SendEmail};
use crate::prelude::Result;

/// Notice sent to the employer when an applicant applies to one of their
/// jobs.
pub struct ApplicationNotice<'a> {
    pub job_title: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

impl<'a> ApplicationNotice<'a> {
    pub fn subject(&self) -> String {
        format!("Job Application - {}", self.job_title)
    }
}

impl<'a> Display for ApplicationNotice<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You have received an application from {} {}",
            self.first_name, self.last_name
        )
    }
}

impl<'a> SendEmail for ApplicationNotice<'a> {
    fn send(&self, mailer: &Mailer, email: &str) -> Result<()> {
        mailer.dispatch(email, &self.subject(), &format!("{}", &self), false)?;
        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    #[traced_test]
    fn test_subject_names_the_job() {
        let notice = ApplicationNotice {
            job_title: "Staff Engineer",
            first_name: "Jane",
            last_name: "Doe",
        };
        assert_eq!(notice.subject(), "Job Application - Staff Engineer");
    }

    #[test]
    fn test_body_names_the_applicant() {
        let notice = ApplicationNotice {
            job_title: "Staff Engineer",
            first_name: "Jane",
            last_name: "Doe",
        };
        assert_eq!(
            format!("{}", &notice),
            "You have received an application from Jane Doe"
        );
    }
}
