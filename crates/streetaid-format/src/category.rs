//! Category-by-day listing view models.
//!
//! The API returns `daysServices` ordered Monday-first. For display the
//! week is rotated so it starts at the current weekday, and each day's
//! providers are sorted by opening time.

use serde::Serialize;

use streetaid_client::{CategoryServices, DayServices, ServiceProvider};

use crate::sanitize::clean;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryViewModel {
    pub days_services: Vec<DayView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayView {
    pub name: String,
    pub service_providers: Vec<ProviderView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderView {
    pub name: String,
    pub info: String,
    pub opening_times: OpeningTimesView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningTimesView {
    pub start_time: String,
    pub end_time: String,
}

/// Format the category listing: rotate the week to start at
/// `today_offset` (Monday-based), sort each day's providers by start
/// time, and sanitize provider text.
#[must_use]
pub fn format_category(raw: CategoryServices, today_offset: i64) -> CategoryViewModel {
    let days = rotate_days_from(raw.days_services, today_offset);

    let days_services = days
        .into_iter()
        .map(|day| {
            let mut providers: Vec<ServiceProvider> = day.service_providers;
            // Stable sort: providers with equal start times keep their
            // original relative order.
            providers.sort_by(|a, b| a.opening_times.start_time.cmp(&b.opening_times.start_time));

            DayView {
                name: day.name,
                service_providers: providers.into_iter().map(format_provider).collect(),
            }
        })
        .collect();

    CategoryViewModel { days_services }
}

fn format_provider(provider: ServiceProvider) -> ProviderView {
    ProviderView {
        name: provider.name,
        info: clean(&provider.info),
        opening_times: OpeningTimesView {
            start_time: provider.opening_times.start_time,
            end_time: provider.opening_times.end_time,
        },
    }
}

/// Rotate the week left so the entry at `offset` comes first.
///
/// `offset` is a Monday-based weekday index. Calendars that number
/// Sunday first can produce `-1` here; `rem_euclid` normalizes any
/// offset into range, so the result is always a valid rotation of the
/// input.
#[must_use]
pub fn rotate_days_from(mut days: Vec<DayServices>, offset: i64) -> Vec<DayServices> {
    if days.is_empty() {
        return days;
    }
    let len = days.len() as i64;
    let start = offset.rem_euclid(len) as usize;
    days.rotate_left(start);
    days
}

#[cfg(test)]
mod tests {
    use streetaid_client::OpeningTimes;

    use super::*;

    fn week() -> Vec<DayServices> {
        [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ]
        .iter()
        .map(|name| DayServices {
            name: (*name).to_owned(),
            service_providers: vec![],
        })
        .collect()
    }

    fn provider(name: &str, start: &str) -> ServiceProvider {
        ServiceProvider {
            name: name.to_owned(),
            info: String::new(),
            opening_times: OpeningTimes {
                start_time: start.to_owned(),
                end_time: "17:00".to_owned(),
            },
        }
    }

    fn names(days: &[DayServices]) -> Vec<&str> {
        days.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn rotate_days_zero_is_identity() {
        let rotated = rotate_days_from(week(), 0);
        assert_eq!(
            names(&rotated),
            [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
    }

    #[test]
    fn rotate_days_every_offset_starts_at_that_day() {
        let base = week();
        for offset in 0..7 {
            let rotated = rotate_days_from(week(), offset);
            assert_eq!(rotated.len(), 7, "offset {offset}");
            assert_eq!(
                rotated[0].name,
                base[offset as usize].name,
                "offset {offset}"
            );
            // A rotation preserves cyclic order.
            for i in 0..7 {
                assert_eq!(
                    rotated[i].name,
                    base[(offset as usize + i) % 7].name,
                    "offset {offset}, position {i}"
                );
            }
        }
    }

    #[test]
    fn rotate_days_negative_offset_still_valid_rotation() {
        // Sunday on a Sunday-zero calendar resolves to -1 on this
        // Monday-based week.
        let rotated = rotate_days_from(week(), -1);
        assert_eq!(rotated.len(), 7);
        assert_eq!(
            names(&rotated),
            [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday"
            ]
        );
    }

    #[test]
    fn rotate_days_empty_input_stays_empty() {
        let rotated = rotate_days_from(vec![], 3);
        assert!(rotated.is_empty());
    }

    #[test]
    fn format_category_sorts_providers_by_start_time() {
        let raw = CategoryServices {
            days_services: vec![DayServices {
                name: "Monday".to_owned(),
                service_providers: vec![
                    provider("Late", "14:00"),
                    provider("Early", "08:30"),
                    provider("Mid", "10:00"),
                ],
            }],
        };

        let view = format_category(raw, 0);
        let providers: Vec<&str> = view.days_services[0]
            .service_providers
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(providers, ["Early", "Mid", "Late"]);
    }

    #[test]
    fn format_category_sort_is_stable_for_equal_start_times() {
        let raw = CategoryServices {
            days_services: vec![DayServices {
                name: "Monday".to_owned(),
                service_providers: vec![
                    provider("First", "09:00"),
                    provider("Second", "09:00"),
                    provider("Earlier", "08:00"),
                ],
            }],
        };

        let view = format_category(raw, 0);
        let providers: Vec<&str> = view.days_services[0]
            .service_providers
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(providers, ["Earlier", "First", "Second"]);
    }

    #[test]
    fn format_category_rotates_before_sorting() {
        let mut days = week();
        days[2].service_providers = vec![provider("Wed provider", "11:00")];
        let view = format_category(CategoryServices { days_services: days }, 2);
        assert_eq!(view.days_services[0].name, "Wednesday");
        assert_eq!(
            view.days_services[0].service_providers[0].name,
            "Wed provider"
        );
    }
}
