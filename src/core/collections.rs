use crate::domain::model::{Product, RatedItem};

pub const MIN_RATING: f64 = 4.0;

/// Items rated at least [`MIN_RATING`], in their original order.
pub fn filter_by_rating(items: &[RatedItem]) -> Vec<RatedItem> {
    items
        .iter()
        .filter(|item| item.rating >= MIN_RATING)
        .cloned()
        .collect()
}

/// Joins every sequence, in argument order, into one vector.
pub fn concatenate<T, I, S>(sequences: I) -> Vec<T>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
{
    sequences.into_iter().flatten().collect()
}

/// Variadic form of [`concatenate`]: `concat_vec![a, b, c]`.
#[macro_export]
macro_rules! concat_vec {
    ($($seq:expr),* $(,)?) => {{
        let mut result = ::std::vec::Vec::new();
        $( result.extend($seq); )*
        result
    }};
}

/// Highest-priced product. Ties keep the earliest one.
pub fn most_expensive(products: &[Product]) -> Option<&Product> {
    products.iter().reduce(|max, current| {
        if current.price > max.price {
            current
        } else {
            max
        }
    })
}
