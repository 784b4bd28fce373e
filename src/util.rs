/// Which child slot of a parent a node hangs from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// Items strictly less than the parent's.
    Left,
    /// Items greater than or equal to the parent's.
    Right,
}

impl Side {
    /// The side `item` descends to from a node holding `pivot`: anything not less-than goes
    /// right, which is where duplicates end up.
    pub(crate) fn toward<T: Ord>(item: &T, pivot: &T) -> Self {
        if item < pivot {
            Self::Left
        } else {
            Self::Right
        }
    }
}
