use crate::types::{Asset, SortOrder};

#[must_use]
pub fn sort_by_type_and_date(assets: &[Asset]) -> Vec<Asset> {
    let mut sorted = assets.to_vec();
    sorted.sort_by(|a, b| {
        (a.kind.name(), a.purchase_date).cmp(&(b.kind.name(), b.purchase_date))
    });
    sorted
}

#[must_use]
pub fn sort_by_office_and_date(assets: &[Asset]) -> Vec<Asset> {
    let mut sorted = assets.to_vec();
    sorted.sort_by(|a, b| {
        (a.office.name.as_str(), a.purchase_date).cmp(&(b.office.name.as_str(), b.purchase_date))
    });
    sorted
}

#[must_use]
pub fn sort_assets(assets: &[Asset], order: SortOrder) -> Vec<Asset> {
    match order {
        SortOrder::Office => sort_by_office_and_date(assets),
        SortOrder::Type => sort_by_type_and_date(assets),
    }
}
