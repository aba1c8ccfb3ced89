use yew_router::Routable;

use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyLink {
    pub label: &'static str,
    pub route: Route,
}

/// The policy documents, in the order the index lists them.
pub const POLICY_LINKS: &[PolicyLink] = &[
    PolicyLink { label: "Terms and Conditions", route: Route::Terms },
    PolicyLink { label: "Privacy Policy", route: Route::Privacy },
    PolicyLink { label: "Refund Policy", route: Route::Refund },
    PolicyLink { label: "Return Policy", route: Route::Return },
    PolicyLink { label: "Shipping Policy", route: Route::Shipping },
];

impl PolicyLink {
    pub fn destination(&self) -> String {
        self.route.to_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_keep_declaration_order() {
        let labels: Vec<_> = POLICY_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            [
                "Terms and Conditions",
                "Privacy Policy",
                "Refund Policy",
                "Return Policy",
                "Shipping Policy",
            ]
        );

        let paths: Vec<_> = POLICY_LINKS.iter().map(PolicyLink::destination).collect();
        assert_eq!(
            paths,
            [
                "/terms-and-conditions",
                "/privacy-policy",
                "/refund-policy",
                "/return-policy",
                "/shipping-policy",
            ]
        );
    }

    #[test]
    fn destinations_are_unique() {
        for (i, a) in POLICY_LINKS.iter().enumerate() {
            for b in &POLICY_LINKS[i + 1..] {
                assert_ne!(a.destination(), b.destination(), "{} vs {}", a.label, b.label);
            }
        }
    }

    #[test]
    fn index_is_not_its_own_entry() {
        assert!(POLICY_LINKS.iter().all(|l| l.route != Route::Policies));
    }
}
