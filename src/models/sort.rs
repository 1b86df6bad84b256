/// Sort parameters accepted by the posts endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl SortField {
    pub fn query_value(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
        }
    }

    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "title" => Some(Self::Title),
            "content" => Some(Self::Content),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn query_value(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn from_query(value: &str) -> Self {
        if value == "desc" { Self::Desc } else { Self::Asc }
    }
}

/// Current sort selection. `field: None` means server insertion order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortOrder {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_round_trips_through_query_values() {
        assert_eq!(SortField::from_query("title"), Some(SortField::Title));
        assert_eq!(SortField::from_query("content"), Some(SortField::Content));
        assert_eq!(SortField::from_query(""), None);
        assert_eq!(SortField::from_query("bogus"), None);
        assert_eq!(SortField::Title.query_value(), "title");
    }

    #[test]
    fn direction_defaults_to_ascending() {
        assert_eq!(SortOrder::default().direction, SortDirection::Asc);
        assert_eq!(SortDirection::from_query("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::from_query("anything"), SortDirection::Asc);
    }
}
