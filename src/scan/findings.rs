use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

// Nuclei text log line: [template-id] [protocol] [severity] target
static FINDING_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\S+)\]\s+\[(\S+)\]\s+\[(\S+)\]\s+(\S+)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub template: String,
    pub severity: String,
    pub target: String,
}

impl Finding {
    pub fn row(&self) -> Vec<String> {
        vec![
            self.template.clone(),
            self.severity.clone(),
            self.target.clone(),
        ]
    }
}

pub fn parse_line(line: &str) -> Option<Finding> {
    let captures = FINDING_LINE.captures(line)?;
    Some(Finding {
        template: captures[1].to_string(),
        severity: captures[3].to_string(),
        target: captures[4].to_string(),
    })
}

pub fn parse_log(contents: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    for line in contents.lines() {
        match parse_line(line) {
            Some(finding) => findings.push(finding),
            None => {
                if !line.trim().is_empty() {
                    warn!("Line not matched: {}", line);
                }
            }
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use crate::scan::findings::{parse_line, parse_log, Finding};

    #[test]
    fn test_parse_line() {
        let finding =
            parse_line("[http-missing-security-headers:x-frame-options] [http] [medium] https://app.example.com");
        assert_eq!(
            finding,
            Some(Finding {
                template: "http-missing-security-headers:x-frame-options".to_string(),
                severity: "medium".to_string(),
                target: "https://app.example.com".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_line_drops_protocol_group() {
        let finding = parse_line("[ssl-issuer] [ssl] [low] app.example.com:443").unwrap();
        assert_eq!(finding.severity, "low");
        assert_eq!(finding.target, "app.example.com:443");
    }

    #[test]
    fn test_parse_line_rejects_other_output() {
        assert_eq!(parse_line("projectdiscovery.io"), None);
        assert_eq!(parse_line("[INF] Using Nuclei Engine 3.1.0"), None);
    }

    #[test]
    fn test_parse_log_keeps_only_matching_lines() {
        let contents = "\
[ssl-issuer] [ssl] [low] app.example.com:443

[INF] Templates loaded: 7012
[tech-detect:nginx] [http] [info] https://app.example.com
";
        let findings = parse_log(contents);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].template, "ssl-issuer");
        assert_eq!(findings[1].template, "tech-detect:nginx");
    }

    #[test]
    fn test_row_shape() {
        let finding = Finding {
            template: "ssl-issuer".to_string(),
            severity: "low".to_string(),
            target: "app.example.com:443".to_string(),
        };
        assert_eq!(finding.row(), vec!["ssl-issuer", "low", "app.example.com:443"]);
    }
}
