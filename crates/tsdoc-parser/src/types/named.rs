use std::cmp::Ordering;

/// Case-insensitive identity by name, shared by every model entity.
///
/// Comparisons are generic over `Self`, so only entities of the same kind
/// can be compared with each other.
pub trait Named {
    fn name(&self) -> &str;

    /// Equality by name, ignoring case.
    fn same_name(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        name_key(self.name()) == name_key(other.name())
    }

    /// Ordering by name, ignoring case.
    fn cmp_by_name(&self, other: &Self) -> Ordering
    where
        Self: Sized,
    {
        name_key(self.name()).cmp(&name_key(other.name()))
    }
}

fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Sort entities by name, ignoring case. Stable for equal names.
pub fn sort_by_name<T: Named>(items: &mut [T]) {
    items.sort_by(|a, b| a.cmp_by_name(b));
}

/// Drop later entities whose name matches an earlier one, ignoring case.
pub fn dedup_by_name<T: Named>(items: &mut Vec<T>) {
    let mut seen = std::collections::HashSet::new();
    items.retain(|item| seen.insert(name_key(item.name())));
}

macro_rules! impl_named {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::types::Named for $ty {
                fn name(&self) -> &str {
                    &self.name
                }
            }
        )*
    };
}

pub(crate) use impl_named;
