//! Result count labels for the results header.

use std::fmt;

use serde::Serialize;

/// How much of the matching set is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultsSummary {
    Empty,
    Single,
    All { total: usize },
    Partial { shown: usize, total: usize },
}

impl ResultsSummary {
    pub fn new(shown: usize, total: usize) -> Self {
        match total {
            0 => ResultsSummary::Empty,
            1 => ResultsSummary::Single,
            _ if shown >= total => ResultsSummary::All { total },
            _ => ResultsSummary::Partial { shown, total },
        }
    }

    pub fn label_pt(&self) -> String {
        match self {
            ResultsSummary::Empty => "Nenhum resultado disponível no momento".to_string(),
            ResultsSummary::Single => "Exibindo 1 estadia".to_string(),
            ResultsSummary::All { total } => format!("{} estadias encontradas", total),
            ResultsSummary::Partial { shown, total } => {
                format!("Exibindo {} de {} estadias", shown, total)
            }
        }
    }
}

impl fmt::Display for ResultsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label_pt())
    }
}
