//! Account Profile View-Model

use chrono::NaiveDate;

use crate::components::primitives::avatar::initials;
use crate::domain::date::ymd;
use crate::domain::money::Money;

/// Dedicated contact for business accounts
#[derive(Debug, Clone, PartialEq)]
pub struct AccountManager {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStat {
    pub label: String,
    pub value: String,
}

/// One on/off preference
#[derive(Debug, Clone, PartialEq)]
pub struct Preference {
    pub key: String,
    pub label: String,
    pub description: String,
    pub enabled: bool,
}

/// Preferences grouped under one accordion panel
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceGroup {
    pub title: String,
    pub preferences: Vec<Preference>,
}

impl PreferenceGroup {
    pub fn enabled_count(&self) -> usize {
        self.preferences.iter().filter(|pref| pref.enabled).count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountProfileProps {
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub tier: String,
    pub member_since: NaiveDate,
    pub location: Option<String>,
    pub stats: Vec<ProfileStat>,
    pub account_manager: Option<AccountManager>,
    pub preference_groups: Vec<PreferenceGroup>,
}

impl AccountProfileProps {
    /// Fallback text for the avatar when no image is set
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    pub fn shows_account_manager(&self) -> bool {
        self.account_manager.is_some()
    }

    pub fn sample() -> Self {
        Self {
            name: "Jordan Lee".into(),
            email: "jordan.lee@example.com".into(),
            avatar: None,
            tier: "Gold member".into(),
            member_since: ymd(2021, 3, 14),
            location: Some("Portland, OR".into()),
            stats: vec![
                ProfileStat {
                    label: "Orders".into(),
                    value: "42".into(),
                },
                ProfileStat {
                    label: "Lifetime spend".into(),
                    value: Money::from_cents(486_230).to_string(),
                },
                ProfileStat {
                    label: "Reviews".into(),
                    value: "17".into(),
                },
                ProfileStat {
                    label: "Reward points".into(),
                    value: "2,450".into(),
                },
            ],
            account_manager: Some(AccountManager {
                name: "Dana Whitfield".into(),
                email: "dana.whitfield@example.com".into(),
                phone: "+1 (503) 555-0142".into(),
                avatar: None,
            }),
            preference_groups: vec![
                PreferenceGroup {
                    title: "Notifications".into(),
                    preferences: vec![
                        Preference {
                            key: "order-updates".into(),
                            label: "Order updates".into(),
                            description: "Shipping and delivery notifications".into(),
                            enabled: true,
                        },
                        Preference {
                            key: "promotions".into(),
                            label: "Promotions".into(),
                            description: "Sales, new arrivals and member offers".into(),
                            enabled: false,
                        },
                        Preference {
                            key: "back-in-stock".into(),
                            label: "Back in stock".into(),
                            description: "Alerts for items on your wishlist".into(),
                            enabled: true,
                        },
                    ],
                },
                PreferenceGroup {
                    title: "Privacy".into(),
                    preferences: vec![
                        Preference {
                            key: "public-reviews".into(),
                            label: "Show my name on reviews".into(),
                            description: "Otherwise reviews are posted anonymously".into(),
                            enabled: true,
                        },
                        Preference {
                            key: "personalisation".into(),
                            label: "Personalised recommendations".into(),
                            description: "Use order history to suggest products".into(),
                            enabled: true,
                        },
                    ],
                },
                PreferenceGroup {
                    title: "Security".into(),
                    preferences: vec![Preference {
                        key: "two-factor".into(),
                        label: "Two-factor authentication".into(),
                        description: "Require a code when signing in on a new device".into(),
                        enabled: false,
                    }],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_fall_back_from_name() {
        let props = AccountProfileProps::sample();
        assert!(props.avatar.is_none());
        assert_eq!(props.initials(), "JL");
    }

    #[test]
    fn account_manager_card_depends_on_manager() {
        let mut props = AccountProfileProps::sample();
        assert!(props.shows_account_manager());
        props.account_manager = None;
        assert!(!props.shows_account_manager());
    }

    #[test]
    fn counts_enabled_preferences_per_group() {
        let props = AccountProfileProps::sample();
        let counts: Vec<_> = props
            .preference_groups
            .iter()
            .map(PreferenceGroup::enabled_count)
            .collect();
        assert_eq!(counts, [2, 2, 0]);
    }

    #[test]
    fn lifetime_spend_is_formatted_money() {
        let props = AccountProfileProps::sample();
        assert_eq!(props.stats[1].value, "$4862.30");
    }
}
