/// Determines what happens if a [`SimpleVec`][crate::SimpleVec] still contains items when it is
/// dropped.
///
/// By default, the container drops its items when it is dropped.
///
/// # Examples
///
/// ```
/// use simple_vec::{DropPolicy, SimpleVec};
///
/// let items = SimpleVec::<u32>::builder()
///     .drop_policy(DropPolicy::MustNotDropItems)
///     .build();
///
/// assert_eq!(items.drop_policy(), DropPolicy::MustNotDropItems);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum DropPolicy {
    /// The container drops its items when the container is dropped. This is the default.
    #[default]
    MayDropItems,

    /// The container panics if it still contains items when it is dropped.
    ///
    /// This may be valuable if the items must be handed off elsewhere (e.g. drained via
    /// [`pop_back()`][crate::SimpleVec::pop_back] or consumed by value) before the
    /// container goes away, and silently dropping them would indicate a logic error.
    ///
    /// The policy carries over to the [`IntoIter`][crate::IntoIter] created from the container,
    /// which panics if it is dropped before yielding every item. Replacing the contents via
    /// [`clone_from()`][Clone::clone_from] or [`clear()`][crate::SimpleVec::clear] drops the
    /// replaced items without panicking.
    MustNotDropItems,
}
