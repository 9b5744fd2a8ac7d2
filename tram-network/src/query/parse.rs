//! Command tokenizer and intent recognition.

use crate::domain::LineId;

/// A recognised query with its arguments, before any lookup.
///
/// Stop names are recovered from token positions around literal keywords.
/// A stop whose name contains `and`, `to` or `from` as a whole word at the
/// split point is therefore split in the wrong place; there is no quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// `via <stop>`
    Via { stop: String },

    /// `between <stop>, and <stop>`
    Between { first: String, second: String },

    /// `time with <line> from <stop> to <stop>`
    Time {
        line: LineId,
        from: String,
        to: String,
    },

    /// `distance from <stop> to <stop>`
    Distance { from: String, to: String },
}

impl Query {
    /// Recognise a command, or `None` if no rule matches.
    ///
    /// Keywords are case-sensitive and tokens are split on any whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use tram_network::query::Query;
    ///
    /// assert_eq!(
    ///     Query::parse("between Chalmers, and Lilla Bommen"),
    ///     Some(Query::Between {
    ///         first: "Chalmers".into(),
    ///         second: "Lilla Bommen".into(),
    ///     })
    /// );
    /// assert_eq!(Query::parse("how far is it"), None);
    /// ```
    pub fn parse(command: &str) -> Option<Self> {
        let tokens: Vec<&str> = command.split_whitespace().collect();

        match tokens.as_slice() {
            ["via", stop @ ..] if (1..=2).contains(&stop.len()) => Some(Query::Via {
                stop: stop.join(" "),
            }),
            ["between", rest @ ..] => {
                let (first, second) = split_at_keyword(rest, "and")?;
                Some(Query::Between {
                    first: strip_commas(first),
                    second: strip_commas(second),
                })
            }
            ["time", "with", line, "from", rest @ ..] => {
                let (from, to) = split_at_keyword(rest, "to")?;
                Some(Query::Time {
                    line: LineId::from(*line),
                    from: from.join(" "),
                    to: to.join(" "),
                })
            }
            ["distance", "from", rest @ ..] => {
                let (from, to) = split_at_keyword(rest, "to")?;
                Some(Query::Distance {
                    from: strip_commas(from),
                    to: strip_commas(to),
                })
            }
            _ => None,
        }
    }
}

/// Split around the first token equal to `keyword`.
fn split_at_keyword<'a>(
    tokens: &'a [&'a str],
    keyword: &str,
) -> Option<(&'a [&'a str], &'a [&'a str])> {
    let index = tokens.iter().position(|t| *t == keyword)?;
    Some((&tokens[..index], &tokens[index + 1..]))
}

fn strip_commas(tokens: &[&str]) -> String {
    tokens.join(" ").trim_matches(',').to_string()
}
