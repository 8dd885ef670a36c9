//! Startup banner formatting.

/// Format the startup banner, ending with an empty line.
pub fn format_banner() -> String {
    let lines = [
        "Welcome to confidential-bank client".to_string(),
        format!("version[confidential-bank]:CB-{}", env!("CARGO_PKG_VERSION")),
        "Press 'tab' to view autocompletions".to_string(),
        "Type '.help' for help".to_string(),
        "Type '.quit' or '.exit' to exit".to_string(),
        String::new(),
        String::new(),
    ];
    lines.join("\n")
}
