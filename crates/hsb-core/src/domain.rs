use serde::Deserialize;

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Review status of a homework. The set is closed: the API contract only
/// produces these three values, anything else is a data error upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Fixed human-readable verdict for each status.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Raw wire shape of one homework record. Only the fields the bot cares
/// about; the API sends more and serde ignores the rest.
#[derive(Clone, Debug, Deserialize)]
pub struct RawHomework {
    pub homework_name: String,
    pub status: String,
}

/// One reviewed submission, after validation against the status table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Homework {
    pub name: String,
    pub status: HomeworkStatus,
}

impl Homework {
    /// The exact notification text for a status transition.
    pub fn status_message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_statuses() {
        assert_eq!(HomeworkStatus::parse("approved"), Some(HomeworkStatus::Approved));
        assert_eq!(HomeworkStatus::parse("reviewing"), Some(HomeworkStatus::Reviewing));
        assert_eq!(HomeworkStatus::parse("rejected"), Some(HomeworkStatus::Rejected));
        assert_eq!(HomeworkStatus::parse("unknown_status"), None);
        assert_eq!(HomeworkStatus::parse("Approved"), None);
    }

    #[test]
    fn status_message_matches_template() {
        let hw = Homework {
            name: "hw1".to_string(),
            status: HomeworkStatus::Approved,
        };
        assert_eq!(
            hw.status_message(),
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn verdicts_cover_all_statuses() {
        assert_eq!(
            HomeworkStatus::Reviewing.verdict(),
            "Работа взята на проверку ревьюером."
        );
        assert_eq!(
            HomeworkStatus::Rejected.verdict(),
            "Работа проверена: у ревьюера есть замечания."
        );
    }
}
