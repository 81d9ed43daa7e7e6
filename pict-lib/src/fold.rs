//! Folding one table row into its argument tokens.

use crate::table::Cell;
use crate::FLAG_PREFIX;
use std::collections::VecDeque;
use std::fmt::{Display, Formatter};

/// The argument tokens computed for one row, in output order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgumentLine(Vec<String>);

impl ArgumentLine {
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for ArgumentLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{first}")?;
            for token in tokens {
                write!(f, " {token}")?;
            }
        }
        Ok(())
    }
}

impl From<ArgumentLine> for Vec<String> {
    fn from(value: ArgumentLine) -> Self {
        value.0
    }
}

/// Fold the (column name, cell) pairs of a row, in column order, into an [ArgumentLine].
///
/// Starting with no tokens, each pair puts its tokens in front of the ones collected so far:
/// - a missing cell adds nothing,
/// - a column without the `--` prefix adds the cell value (the switch is part of the value),
/// - a switch column adds the value, followed by the column name.
///
/// So for `--retries = 3` followed by `target = host1`, the line is `host1 3 --retries`.
pub fn fold_row<'a, I>(pairs: I) -> ArgumentLine
where
    I: IntoIterator<Item = (&'a str, &'a Cell)>,
{
    let tokens = pairs
        .into_iter()
        .fold(VecDeque::new(), |mut tokens, (column, cell)| {
            let Some(value) = cell.as_text() else {
                return tokens;
            };

            if column.starts_with(FLAG_PREFIX) {
                // the unit [value, column] goes to the front
                tokens.push_front(column.to_owned());
            }
            tokens.push_front(value.to_owned());

            tokens
        });

    ArgumentLine(tokens.into())
}
