//! Validation rules for `local@domain` fields
//!
//! Every [`Rule`] is an independent predicate over the whole field. Rules
//! split the field at the first `@` on their own, so any subset of them can
//! be run in any order. A [`RuleChain`] runs rules in sequence and stops at
//! the first failure.
//!
//! Two conventions hold for every rule:
//!
//! - An empty field passes. Whether a value is required is decided elsewhere.
//! - Without an `@`, every rule except [`Rule::DelimiterPresent`] passes.

use core::fmt;
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::debug;

/// Separator between the local and domain parts
pub const DELIMITER: char = '@';

/// Characters rejected anywhere in the field by [`Rule::ForbiddenCharacters`]
pub const FORBIDDEN_CHARACTERS: [char; 10] = ['\'', '"', '(', ')', '<', '>', ',', ';', ':', '\\'];

static IPV4_LITERAL: OnceLock<Regex> = OnceLock::new();

fn ipv4_literal() -> &'static Regex {
    IPV4_LITERAL.get_or_init(|| {
        Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$")
            .expect("IPv4 literal pattern is valid")
    })
}

/// A field split at its first delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredField<'a> {
    /// Text before the first `@`
    pub local: &'a str,
    /// Text after the first `@`
    pub domain: &'a str,
}

impl<'a> StructuredField<'a> {
    /// Split `field` at the first `@`, or `None` when there is none
    pub fn split(field: &'a str) -> Option<Self> {
        field
            .split_once(DELIMITER)
            .map(|(local, domain)| Self { local, domain })
    }
}

/// A single validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Rule {
    /// The field contains `@`
    DelimiterPresent,
    /// The local part is not empty
    LocalNonEmpty,
    /// The local part does not start with `.`
    LocalNoLeadingDot,
    /// The local part does not end with `.`
    LocalNoTrailingDot,
    /// The local part does not start with `-`
    LocalNoLeadingHyphen,
    /// The local part contains neither `[` nor `]`
    LocalNoBracket,
    /// The domain part is not empty
    DomainNonEmpty,
    /// The domain part contains a `.`
    DomainHasDot,
    /// The domain part does not start with `.`
    DomainNoLeadingDot,
    /// The domain part does not contain `..`
    DomainNoDoubleDot,
    /// The domain part holds both of `[` and `]` or neither
    BracketPairing,
    /// A bracketed domain starts with `[` and ends with `]`
    BracketPosition,
    /// A bracketed domain holds an IPv4 literal
    BracketContent,
    /// The field contains at most one `@`
    SingleAtSign,
    /// The field contains none of [`FORBIDDEN_CHARACTERS`]
    ForbiddenCharacters,
    /// The field contains no space
    NoSpace,
    /// The field does not contain `..`
    NoConsecutiveDots,
}

impl Rule {
    /// Rules run by [`validate_field`], in order
    pub const CANONICAL: [Rule; 15] = [
        Rule::DelimiterPresent,
        Rule::LocalNonEmpty,
        Rule::LocalNoLeadingDot,
        Rule::LocalNoTrailingDot,
        Rule::LocalNoLeadingHyphen,
        Rule::LocalNoBracket,
        Rule::DomainNonEmpty,
        Rule::DomainHasDot,
        Rule::DomainNoLeadingDot,
        Rule::DomainNoDoubleDot,
        Rule::BracketPairing,
        Rule::BracketPosition,
        Rule::BracketContent,
        Rule::SingleAtSign,
        Rule::ForbiddenCharacters,
    ];

    /// Rules outside the canonical chain
    pub const EXTRA: [Rule; 2] = [Rule::NoSpace, Rule::NoConsecutiveDots];

    /// Every rule: canonical first, then extras
    pub fn all() -> impl Iterator<Item = Rule> {
        Self::CANONICAL.into_iter().chain(Self::EXTRA)
    }

    /// Stable kebab-case name
    pub fn name(&self) -> &'static str {
        match self {
            Rule::DelimiterPresent => "delimiter-present",
            Rule::LocalNonEmpty => "local-non-empty",
            Rule::LocalNoLeadingDot => "local-no-leading-dot",
            Rule::LocalNoTrailingDot => "local-no-trailing-dot",
            Rule::LocalNoLeadingHyphen => "local-no-leading-hyphen",
            Rule::LocalNoBracket => "local-no-bracket",
            Rule::DomainNonEmpty => "domain-non-empty",
            Rule::DomainHasDot => "domain-has-dot",
            Rule::DomainNoLeadingDot => "domain-no-leading-dot",
            Rule::DomainNoDoubleDot => "domain-no-double-dot",
            Rule::BracketPairing => "bracket-pairing",
            Rule::BracketPosition => "bracket-position",
            Rule::BracketContent => "bracket-content",
            Rule::SingleAtSign => "single-at-sign",
            Rule::ForbiddenCharacters => "forbidden-characters",
            Rule::NoSpace => "no-space",
            Rule::NoConsecutiveDots => "no-consecutive-dots",
        }
    }

    /// Short description of what makes the rule fail
    pub fn description(&self) -> &'static str {
        match self {
            Rule::DelimiterPresent => "no '@' in the field",
            Rule::LocalNonEmpty => "nothing before '@'",
            Rule::LocalNoLeadingDot => "local part starts with '.'",
            Rule::LocalNoTrailingDot => "local part ends with '.'",
            Rule::LocalNoLeadingHyphen => "local part starts with '-'",
            Rule::LocalNoBracket => "local part contains '[' or ']'",
            Rule::DomainNonEmpty => "nothing after '@'",
            Rule::DomainHasDot => "domain part has no '.'",
            Rule::DomainNoLeadingDot => "domain part starts with '.'",
            Rule::DomainNoDoubleDot => "domain part contains '..'",
            Rule::BracketPairing => "unpaired '[' or ']' in domain part",
            Rule::BracketPosition => "brackets are not the first and last domain characters",
            Rule::BracketContent => "bracketed domain is not an IPv4 literal",
            Rule::SingleAtSign => "more than one '@'",
            Rule::ForbiddenCharacters => "contains one of ' \" ( ) < > , ; : \\",
            Rule::NoSpace => "contains a space",
            Rule::NoConsecutiveDots => "contains '..'",
        }
    }

    /// Whether `field` passes this rule
    pub fn check(&self, field: &str) -> bool {
        if field.is_empty() {
            return true;
        }

        match self {
            Rule::DelimiterPresent => field.contains(DELIMITER),
            Rule::SingleAtSign => field.matches(DELIMITER).count() <= 1,
            Rule::ForbiddenCharacters => !field.contains(FORBIDDEN_CHARACTERS),
            Rule::NoSpace => !field.contains(' '),
            Rule::NoConsecutiveDots => !field.contains(".."),
            _ => match StructuredField::split(field) {
                Some(parts) => self.check_parts(parts),
                None => true,
            },
        }
    }

    fn check_parts(&self, StructuredField { local, domain }: StructuredField<'_>) -> bool {
        match self {
            Rule::LocalNonEmpty => !local.is_empty(),
            Rule::LocalNoLeadingDot => !local.starts_with('.'),
            Rule::LocalNoTrailingDot => !local.ends_with('.'),
            Rule::LocalNoLeadingHyphen => !local.starts_with('-'),
            Rule::LocalNoBracket => !local.contains(['[', ']']),
            Rule::DomainNonEmpty => !domain.is_empty(),
            Rule::DomainHasDot => domain.contains('.'),
            Rule::DomainNoLeadingDot => !domain.starts_with('.'),
            Rule::DomainNoDoubleDot => !domain.contains(".."),
            Rule::BracketPairing => domain.contains('[') == domain.contains(']'),
            Rule::BracketPosition => match (domain.find('['), domain.find(']')) {
                (Some(open), Some(close)) => open == 0 && close == domain.len() - 1,
                _ => true,
            },
            Rule::BracketContent => match (domain.find('['), domain.find(']')) {
                (Some(open), Some(close)) if open < close => {
                    ipv4_literal().is_match(&domain[open + 1..close])
                }
                (Some(_), Some(_)) => false,
                _ => true,
            },
            _ => true,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown rule name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRule(pub String);

impl fmt::Display for UnknownRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown validation rule '{}'", self.0)
    }
}

impl std::error::Error for UnknownRule {}

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Rule::all()
            .find(|rule| rule.name() == name)
            .ok_or_else(|| UnknownRule(name.to_string()))
    }
}

/// Result of running a chain of rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationOutcome {
    /// First rule that failed, if any
    pub failed_rule: Option<Rule>,
}

impl ValidationOutcome {
    /// Whether every rule passed
    pub fn is_pass(&self) -> bool {
        self.failed_rule.is_none()
    }
}

/// Ordered list of rules evaluated with short-circuit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleChain {
    rules: Vec<Rule>,
}

impl Default for RuleChain {
    fn default() -> Self {
        Self::canonical()
    }
}

impl RuleChain {
    /// The canonical chain
    pub fn canonical() -> Self {
        Self {
            rules: Rule::CANONICAL.to_vec(),
        }
    }

    /// The canonical chain followed by [`Rule::EXTRA`]
    pub fn strict() -> Self {
        Self {
            rules: Rule::all().collect(),
        }
    }

    /// Chain over the given rules, in order
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Chain from rule names, in order
    pub fn from_names<I, S>(names: I) -> Result<Self, UnknownRule>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<_>, _>>()
            .map(|rules| Self { rules })
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Whether the chain has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run the rules in order, stopping at the first failure
    pub fn validate(&self, field: &str) -> ValidationOutcome {
        let failed_rule = self.rules.iter().copied().find(|rule| !rule.check(field));
        if let Some(rule) = failed_rule {
            debug!(rule = rule.name(), "field rejected");
        }
        ValidationOutcome { failed_rule }
    }
}

/// Run the canonical chain over `field`
///
/// ```
/// use zenhan_core::{validate_field, Rule};
///
/// assert!(validate_field("user@example.com").is_pass());
/// assert_eq!(
///     validate_field("user@@example.com").failed_rule,
///     Some(Rule::SingleAtSign)
/// );
/// ```
pub fn validate_field(field: &str) -> ValidationOutcome {
    RuleChain::canonical().validate(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(field: &str) -> Option<Rule> {
        validate_field(field).failed_rule
    }

    #[test]
    fn test_valid_fields() {
        assert_eq!(failed("user@example.com"), None);
        assert_eq!(failed("first.last@sub.example.co.jp"), None);
        assert_eq!(failed("user@[192.168.1.1]"), None);
        assert_eq!(failed("a-b_c+d@example.org"), None);
    }

    #[test]
    fn test_chain_reports_first_failure() {
        assert_eq!(failed("userexample.com"), Some(Rule::DelimiterPresent));
        assert_eq!(failed("@example.com"), Some(Rule::LocalNonEmpty));
        assert_eq!(failed(".user@example.com"), Some(Rule::LocalNoLeadingDot));
        assert_eq!(failed("user.@example.com"), Some(Rule::LocalNoTrailingDot));
        assert_eq!(failed("-user@example.com"), Some(Rule::LocalNoLeadingHyphen));
        assert_eq!(failed("us[er@example.com"), Some(Rule::LocalNoBracket));
        assert_eq!(failed("user@"), Some(Rule::DomainNonEmpty));
        assert_eq!(failed("user@localhost"), Some(Rule::DomainHasDot));
        assert_eq!(failed("user@.example.com"), Some(Rule::DomainNoLeadingDot));
        assert_eq!(failed("user@example..com"), Some(Rule::DomainNoDoubleDot));
        assert_eq!(failed("user@[192.168.1.1"), Some(Rule::BracketPairing));
        assert_eq!(failed("user@x[192.168.1.1]"), Some(Rule::BracketPosition));
        assert_eq!(failed("user@[192.168.1]"), Some(Rule::BracketContent));
        assert_eq!(failed("user@@example.com"), Some(Rule::SingleAtSign));
        assert_eq!(failed("us(er@example.com"), Some(Rule::ForbiddenCharacters));
    }

    #[test]
    fn test_empty_field_passes_every_rule() {
        for rule in Rule::all() {
            assert!(rule.check(""), "{rule} rejected an empty field");
        }
    }

    #[test]
    fn test_missing_delimiter_is_vacuous() {
        for rule in Rule::all().filter(|r| *r != Rule::DelimiterPresent) {
            assert!(rule.check(".[x"), "{rule} rejected a field without '@'");
        }
        assert!(!Rule::DelimiterPresent.check(".[x"));
    }

    #[test]
    fn test_local_trailing_dot_uses_last_character() {
        assert!(!Rule::LocalNoTrailingDot.check("a.b.@example.com"));
        assert!(Rule::LocalNoTrailingDot.check("a.b@example.com"));
    }

    #[test]
    fn test_domain_has_dot_accepts_leading_dot() {
        assert!(Rule::DomainHasDot.check("user@.com"));
        assert!(!Rule::DomainNoLeadingDot.check("user@.com"));
    }

    #[test]
    fn test_bracket_rules() {
        assert!(!Rule::BracketPairing.check("user@example]"));
        assert!(Rule::BracketPairing.check("user@[1.2.3.4]"));
        assert!(!Rule::BracketPosition.check("user@[1.2.3.4]x"));
        assert!(Rule::BracketPosition.check("user@example.com"));
        assert!(Rule::BracketContent.check("user@[255.255.255.255]"));
        assert!(!Rule::BracketContent.check("user@[1.2.3.4.5]"));
        assert!(!Rule::BracketContent.check("user@[1234.1.1.1]"));
        assert!(!Rule::BracketContent.check("user@[a.b.c.d]"));
        assert!(!Rule::BracketContent.check("user@]1.2.3.4["));
        assert!(!Rule::BracketContent.check("user@[１.2.3.4]"));
    }

    #[test]
    fn test_at_sign_count_spans_whole_field() {
        assert!(!Rule::SingleAtSign.check("a@b@c.com"));
        assert!(Rule::SingleAtSign.check("a@c.com"));
    }

    #[test]
    fn test_forbidden_characters() {
        for ch in FORBIDDEN_CHARACTERS {
            let field = format!("us{ch}er@example.com");
            assert!(!Rule::ForbiddenCharacters.check(&field), "{ch} accepted");
        }
        assert!(Rule::ForbiddenCharacters.check("user+tag@example.com"));
    }

    #[test]
    fn test_extra_rules() {
        assert!(!Rule::NoSpace.check("us er@example.com"));
        assert!(!Rule::NoConsecutiveDots.check("a..b@example.com"));
        assert!(Rule::NoConsecutiveDots.check("a.b@example.com"));
        assert_eq!(failed("a..b@example.com"), None);
        assert_eq!(
            RuleChain::strict().validate("a..b@example.com").failed_rule,
            Some(Rule::NoConsecutiveDots)
        );
    }

    #[test]
    fn test_rule_names_round_trip() {
        for rule in Rule::all() {
            assert_eq!(rule.name().parse::<Rule>(), Ok(rule));
            assert_eq!(rule.to_string(), rule.name());
        }
        assert_eq!(
            "no-such-rule".parse::<Rule>(),
            Err(UnknownRule("no-such-rule".to_string()))
        );
    }

    #[test]
    fn test_chain_from_names() {
        let chain = RuleChain::from_names(["single-at-sign", " domain-has-dot "]).unwrap();
        assert_eq!(chain.rules(), &[Rule::SingleAtSign, Rule::DomainHasDot]);
        assert_eq!(
            chain.validate("a@b@c").failed_rule,
            Some(Rule::SingleAtSign)
        );
        assert!(RuleChain::from_names(["bogus"]).is_err());
    }

    #[test]
    fn test_empty_chain_passes_everything() {
        let chain = RuleChain::new([]);
        assert!(chain.is_empty());
        assert!(chain.validate("not a field").is_pass());
    }

    #[test]
    fn test_split() {
        assert_eq!(
            StructuredField::split("a@b@c"),
            Some(StructuredField {
                local: "a",
                domain: "b@c"
            })
        );
        assert_eq!(StructuredField::split("abc"), None);
    }
}
