use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Where the dispatch step falls relative to the two recursive calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    #[serde(alias = "preorder")]
    Pre,
    #[serde(alias = "inorder")]
    In,
    #[serde(alias = "postorder")]
    Post,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Pre => f.write_str("pre"),
            Order::In => f.write_str("in"),
            Order::Post => f.write_str("post"),
        }
    }
}

impl FromStr for Order {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pre" | "preorder" => Ok(Order::Pre),
            "in" | "inorder" => Ok(Order::In),
            "post" | "postorder" => Ok(Order::Post),
            _ => Err(DomainError::UnknownOrder(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pre", Order::Pre)]
    #[case("PreOrder", Order::Pre)]
    #[case("in", Order::In)]
    #[case("inorder", Order::In)]
    #[case("post", Order::Post)]
    #[case("postorder", Order::Post)]
    fn given_order_name_when_parsing_then_returns_variant(
        #[case] input: &str,
        #[case] expected: Order,
    ) {
        assert_eq!(input.parse::<Order>().unwrap(), expected);
    }

    #[test]
    fn given_unknown_order_when_parsing_then_fails() {
        assert_eq!(
            "level".parse::<Order>(),
            Err(DomainError::UnknownOrder("level".into()))
        );
    }
}
