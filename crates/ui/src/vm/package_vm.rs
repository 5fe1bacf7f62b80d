use luxe_core::model::{Package, PackageTag};

const UNSURE_OPTION: &str = "Unsure / Need Advice";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageCardVm {
    pub tag: PackageTag,
    pub title: String,
    pub price: String,
    pub price_suffix: Option<&'static str>,
    pub description: String,
    pub features: Vec<String>,
    pub highlighted: bool,
    pub recommended: bool,
}

impl PackageCardVm {
    #[must_use]
    pub fn card_class(&self) -> String {
        let mut class = String::from("package-card");
        if self.highlighted {
            class.push_str(" package-card--highlighted");
        }
        if self.recommended {
            class.push_str(" package-card--recommended");
        }
        class
    }
}

#[must_use]
pub fn map_package_card(package: &Package, recommended: Option<PackageTag>) -> PackageCardVm {
    PackageCardVm {
        tag: package.tag(),
        title: package.title().to_string(),
        price: package.price().to_string(),
        price_suffix: (!package.is_custom_priced()).then_some("/ event"),
        description: package.description().to_string(),
        features: package.features().to_vec(),
        highlighted: package.highlighted(),
        recommended: recommended == Some(package.tag()),
    }
}

#[must_use]
pub fn map_package_cards(packages: &[Package], recommended: Option<PackageTag>) -> Vec<PackageCardVm> {
    packages
        .iter()
        .map(|package| map_package_card(package, recommended))
        .collect()
}

/// Entries for the contact form's "Interested Package" select.
#[must_use]
pub fn package_interest_options(packages: &[Package]) -> Vec<String> {
    packages
        .iter()
        .map(|package| {
            let compact_price: String = package
                .price()
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .collect();
            format!("{} ({compact_price})", package.title())
        })
        .chain(std::iter::once(UNSURE_OPTION.to_string()))
        .collect()
}
