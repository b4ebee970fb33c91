/// Which categories of a collection are visible. A tagged variant, so
/// an empty selection and a full selection are distinct states rather
/// than magic values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter<T> {
    All,
    None,
    Selected(Vec<T>),
}

impl<T: PartialEq + Clone> CategoryFilter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::None => false,
            CategoryFilter::Selected(values) => values.contains(value),
        }
    }

    /// Keep the items whose discriminant is in the active set,
    /// preserving input order.
    pub fn apply<'a, E>(&self, items: &'a [E], discriminant: impl Fn(&E) -> T) -> Vec<&'a E> {
        items
            .iter()
            .filter(|item| self.matches(&discriminant(item)))
            .collect()
    }

    /// Flip one category in or out of the active set. `universe` is the
    /// full set of categories, used to collapse a complete selection
    /// back to `All` and an empty one to `None`.
    pub fn toggle(self, category: T, universe: &[T]) -> Self {
        let mut selected = match self {
            CategoryFilter::All => universe
                .iter()
                .filter(|c| **c != category)
                .cloned()
                .collect::<Vec<_>>(),
            CategoryFilter::None => vec![category],
            CategoryFilter::Selected(mut values) => {
                if let Some(at) = values.iter().position(|c| *c == category) {
                    values.remove(at);
                } else {
                    values.push(category);
                }
                values
            }
        };

        if selected.is_empty() {
            return CategoryFilter::None;
        }
        if universe.iter().all(|c| selected.contains(c)) {
            return CategoryFilter::All;
        }
        selected.dedup();
        CategoryFilter::Selected(selected)
    }
}
