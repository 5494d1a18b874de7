use crate::EntryId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedViewModel {
    pub entries: Vec<EntryRowView>,
    pub busy: bool,
    pub outstanding: usize,
    pub is_empty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRowView {
    pub id: EntryId,
    pub url: String,
    /// 1-based display position.
    pub position: usize,
}
