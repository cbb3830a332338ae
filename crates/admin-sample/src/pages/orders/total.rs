//! Running-total computation for the order dialogs.

use crate::model::{Product, ProductId};

/// Sum of the prices of the catalog entries whose id appears in the
/// selection, rounded to 2 decimal places.
///
/// The scan exits early once as many catalog entries have matched as there
/// are selected ids; ids that never match any catalog entry are silently
/// ignored and merely cost a full pass. Accumulation is plain floating
/// point with a single final rounding, which is accepted for display
/// purposes (the server reprices orders authoritatively).
pub fn calculate_total(products: &[Product], selected_product_ids: &[ProductId]) -> f64 {
    let mut total = 0.0;
    let mut products_to_find = selected_product_ids.len();

    for product in products {
        if !selected_product_ids.contains(&product.id) {
            continue;
        }

        total += product.price;
        products_to_find -= 1;

        if products_to_find == 0 {
            break;
        }
    }

    (total * 100.0).round() / 100.0
}
