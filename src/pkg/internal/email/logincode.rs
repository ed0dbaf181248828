use std::fmt::{self, Display};

use super::{Mailer, SendEmail};
use crate::prelude::Result;

pub struct LoginCodeTemplate<'a> {
    pub name: &'a str,
    pub code: &'a str,
}

impl<'a> Display for LoginCodeTemplate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let html_template = format!(
            r#"
            <!DOCTYPE html>
            <html>
            <body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;">
                <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
                    <h2 style="color: #111827;">Hi {},</h2>
                    <p>Use this code to sign in:</p>
                    <div style="font-size: 32px; font-weight: bold; letter-spacing: 4px; color: #059669;">{}</div>
                    <p style="color: #4b5563; font-size: 14px;">
                        The code is for one-time use and expires in an hour.<br>
                        If you did not request it, you can safely ignore this email.
                    </p>
                </div>
            </body>
            </html>
            "#,
            self.name, self.code
        );
        write!(f, "{}", html_template)
    }
}

impl<'a> SendEmail for LoginCodeTemplate<'a> {
    fn send(&self, mailer: &Mailer, email: &str) -> Result<()> {
        mailer.dispatch(
            email,
            "Here's your sign-in code",
            &format!("{}", &self),
            true,
        )?;
        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_template_carries_the_code() {
        let rendered = format!(
            "{}",
            LoginCodeTemplate {
                name: "Jane",
                code: "493028",
            }
        );
        assert!(rendered.contains("493028"));
        assert!(rendered.contains("Hi Jane"));
    }
}
