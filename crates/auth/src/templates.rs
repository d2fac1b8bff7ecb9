//! HTML templates for the PIN-entry page.

/// Escape HTML special characters to prevent XSS.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate the PIN-entry page.
///
/// When both the flow ID and redirect URL are known the flow ID is a hidden
/// field and only the PIN is asked for. Otherwise the user types the flow ID
/// too.
///
/// The form action is relative, so it resolves next to wherever the page is
/// served, including under a path prefix of the public URL.
pub fn pin_entry_page(flow_id: Option<&str>, redirect_url: Option<&str>) -> String {
    let redirect_url = html_escape(redirect_url.unwrap_or_default());

    let (heading, flow_field) = match flow_id.filter(|id| !id.is_empty()) {
        Some(flow_id) if !redirect_url.is_empty() => (
            "Enter Your PIN",
            format!(
                r#"<input type="hidden" name="flowId" value="{}" />"#,
                html_escape(flow_id)
            ),
        ),
        _ => (
            "Enter Flow ID &amp; PIN",
            r#"<label for="flowId">Flow ID</label>
        <input type="text" id="flowId" name="flowId" required />"#
                .to_string(),
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>PIN Verification (MOCK)</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, sans-serif;
            max-width: 400px;
            margin: 100px auto;
            padding: 20px;
        }}
        form {{
            background: #f8f9fa;
            padding: 20px;
            border-radius: 8px;
        }}
        label {{
            display: block;
            margin-bottom: 5px;
            font-weight: 500;
        }}
        input[type="text"], input[type="password"] {{
            width: 100%;
            padding: 10px;
            margin-bottom: 15px;
            border: 1px solid #ced4da;
            border-radius: 4px;
            box-sizing: border-box;
        }}
        button {{
            width: 100%;
            padding: 12px;
            background: #007bff;
            color: white;
            border: none;
            border-radius: 4px;
            cursor: pointer;
            font-size: 16px;
        }}
    </style>
</head>
<body>
    <h2>{heading}</h2>
    <form action="validate-pin" method="POST">
        {flow_field}
        <label for="pin">PIN</label>
        <input type="password" id="pin" name="pin" required />
        <input type="hidden" name="redirectUrl" value="{redirect_url}" />
        <button type="submit">Submit</button>
    </form>
</body>
</html>"#
    )
}
