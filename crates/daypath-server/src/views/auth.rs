use super::{alert, escape, page};

fn form(title: &str, action: &str, submit: &str, email: &str, error: Option<&str>, footer: &str) -> String {
    let body = format!(
        "<div class=\"card\"><span class=\"pill\">daypath</span><h1>{title}</h1>\
         <p class=\"note\">84 days of practical data analysis, one short lesson at a time.</p>\
         {alert}\
         <form method=\"post\" action=\"{action}\">\
         <p><label>Email<br><input type=\"email\" name=\"email\" value=\"{email}\" required></label></p>\
         <p><label>Password<br><input type=\"password\" name=\"password\" required></label></p>\
         <button type=\"submit\">{submit}</button></form>\
         <p class=\"note\">{footer}</p></div>",
        alert = alert(error),
        email = escape(email),
    );
    page(title, false, &body)
}

pub fn login_page(email: &str, error: Option<&str>) -> String {
    form(
        "Sign in",
        "/login",
        "Sign in",
        email,
        error,
        "New here? <a href=\"/register\">Create an account</a>",
    )
}

pub fn register_page(email: &str, error: Option<&str>) -> String {
    form(
        "Create account",
        "/register",
        "Create account",
        email,
        error,
        "Already have an account? <a href=\"/login\">Sign in</a>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_keeps_escaped_email_and_error() {
        let html = login_page("a\"@b.c", Some("Invalid email or password."));
        assert!(html.contains("value=\"a&quot;@b.c\""));
        assert!(html.contains("<div class=\"alert\">Invalid email or password.</div>"));
        assert!(html.contains("action=\"/login\""));
    }
}
