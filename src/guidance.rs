//! Static security guidance shown in the modal.
//!
//! Mitigation data used to come from the server; it is now fixed at build
//! time and the same for every mind-map node.

#[cfg(test)]
#[path = "guidance_test.rs"]
mod guidance_test;

/// Heading prefix; the clicked node's label is appended.
pub const TITLE_PREFIX: &str = "🛡️ General Security Guidance for ";

/// Mitigation points, in display order.
pub const MITIGATION_POINTS: [&str; 5] = [
    "Regularly update software and dependencies.",
    "Implement principle of least privilege in access control.",
    "Monitor logs for unusual activities or anomalies.",
    "Patch known vulnerabilities promptly.",
    "Use secure communication protocols (HTTPS, SSH, etc.).",
];

/// Prevention points, in display order.
pub const PREVENTION_POINTS: [&str; 5] = [
    "Enable MFA (Multi-Factor Authentication) wherever possible.",
    "Train users to recognize phishing or social engineering attempts.",
    "Conduct regular security audits and incident response drills.",
    "Back up critical data and verify restoration processes.",
    "Maintain a clear incident escalation and reporting policy.",
];

/// Modal heading for `title`. Any text is accepted, including empty.
#[must_use]
pub fn modal_title(title: &str) -> String {
    format!("{TITLE_PREFIX}{title}")
}
