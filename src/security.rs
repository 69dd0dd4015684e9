use solana_security_txt::security_txt;

security_txt! {
    name: "Stable Escrow program",
    project_url: "https://github.com/yourusername/stable-escrow",
    contacts: "link:https://github.com/yourusername/stable-escrow/security/advisories/new",
    policy: "https://github.com/yourusername/stable-escrow/blob/main/SECURITY.md",
    source_code: "https://github.com/yourusername/stable-escrow"
}
