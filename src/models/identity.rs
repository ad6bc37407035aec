/// Records that can be re-located in the store without a primary key.
///
/// `Key` is the tuple of identity fields compared for exact equality.
pub trait Identified {
    type Key;

    fn matches(&self, key: &Self::Key) -> bool;

    /// Generated row id, if the row carries one (legacy rows do not).
    fn record_id(&self) -> Option<&str>;
}
