use std::collections::HashMap;

use chrono::{DateTime, Days, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;
use studiodesk_persist::TicketStore;
use studiodesk_types::{Priority, Ticket};

use crate::query::{AnalyticsQuery, TimeRange};

/// Points in the trend series
pub const TREND_DAYS: u64 = 30;

pub const TOP_CATEGORY_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudioCount {
    pub studio: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamCount {
    pub team: String,
    pub count: usize,
}

/// Tickets created on one local calendar day (`YYYY-MM-DD`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityResolution {
    pub priority: Priority,
    pub avg_hours: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_tickets: usize,
    pub avg_resolution_hours: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsAggregate {
    pub range: TimeRange,
    pub studio: String,
    pub tickets_by_category: Vec<CategoryCount>,
    pub tickets_by_studio: Vec<StudioCount>,
    pub tickets_by_team: Vec<TeamCount>,
    pub ticket_trend: Vec<DailyCount>,
    pub resolution_time_by_priority: Vec<PriorityResolution>,
    pub top_categories: Vec<CategoryCount>,
    pub summary: Summary,
}

impl AnalyticsAggregate {
    /// Aggregate with every series empty
    pub fn empty(query: &AnalyticsQuery) -> Self {
        Self {
            range: query.range,
            studio: query.studio.as_str().to_string(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ticket_trend.is_empty() && self.resolution_time_by_priority.is_empty()
    }
}

/// Read every ticket and aggregate in the server's local time zone
///
/// A failed read yields [`AnalyticsAggregate::empty`].
pub async fn compute_analytics(store: &dyn TicketStore, query: &AnalyticsQuery) -> AnalyticsAggregate {
    let tickets = match store.list_tickets().await {
        Ok(tickets) => tickets,
        Err(e) => {
            tracing::error!(error = %e, backend = store.backend_name(), "Failed to load tickets for analytics");
            return AnalyticsAggregate::empty(query);
        }
    };

    let selected: Vec<Ticket> = tickets
        .into_iter()
        .filter(|t| query.studio.matches(t))
        .collect();

    tracing::debug!(tickets = selected.len(), range = %query.range, studio = query.studio.as_str(), "Computing analytics");

    let mut aggregate = aggregate_at(&selected, Local::now());
    aggregate.range = query.range;
    aggregate.studio = query.studio.as_str().to_string();
    aggregate
}

/// Pure aggregation with an explicit "now"; day boundaries are midnights in `now`'s zone
pub fn aggregate_at<Tz: TimeZone>(tickets: &[Ticket], now: DateTime<Tz>) -> AnalyticsAggregate {
    let tickets_by_category: Vec<CategoryCount> = count_by(tickets, |t| t.category_id.as_deref())
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();
    let tickets_by_studio = count_by(tickets, |t| t.studio_id.as_deref())
        .into_iter()
        .map(|(studio, count)| StudioCount { studio, count })
        .collect();
    let tickets_by_team = count_by(tickets, |t| t.assigned_to.as_deref())
        .into_iter()
        .map(|(team, count)| TeamCount { team, count })
        .collect();

    let resolution_time_by_priority = resolution_by_priority(tickets);
    let top_categories = tickets_by_category.iter().take(TOP_CATEGORY_COUNT).cloned().collect();

    let summary = Summary {
        total_tickets: tickets.len(),
        avg_resolution_hours: round_one_decimal(
            resolution_time_by_priority.iter().map(|r| r.avg_hours).sum::<f64>()
                / Priority::ALL.len() as f64,
        ),
    };

    AnalyticsAggregate {
        range: TimeRange::default(),
        studio: "all".to_string(),
        tickets_by_category,
        tickets_by_studio,
        tickets_by_team,
        ticket_trend: daily_trend(tickets, &now),
        resolution_time_by_priority,
        top_categories,
        summary,
    }
}

/// Presence-filtered group-by, count descending then key ascending
fn count_by<F>(tickets: &[Ticket], key: F) -> Vec<(String, usize)>
where
    F: Fn(&Ticket) -> Option<&str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for ticket in tickets {
        if let Some(k) = key(ticket) {
            *counts.entry(k).or_insert(0) += 1;
        }
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, count)| (k.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

fn daily_trend<Tz: TimeZone>(tickets: &[Ticket], now: &DateTime<Tz>) -> Vec<DailyCount> {
    let tz = now.timezone();
    let today = now.date_naive();

    (0..TREND_DAYS)
        .rev()
        .filter_map(|days_back| today.checked_sub_days(Days::new(days_back)))
        .map(|day| {
            let count = match (local_midnight(&tz, day), day.succ_opt().and_then(|next| local_midnight(&tz, next))) {
                (Some(start), Some(end)) => tickets
                    .iter()
                    .filter(|t| t.created_at >= start && t.created_at < end)
                    .count(),
                _ => 0,
            };
            DailyCount {
                date: day.format("%Y-%m-%d").to_string(),
                count,
            }
        })
        .collect()
}

/// Start of `day` in `tz`, as UTC
fn local_midnight<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&day.and_time(NaiveTime::MIN))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

fn resolution_by_priority(tickets: &[Ticket]) -> Vec<PriorityResolution> {
    Priority::ALL
        .iter()
        .map(|&priority| {
            let hours: Vec<f64> = tickets
                .iter()
                .filter(|t| t.priority == priority)
                .filter_map(Ticket::resolution_hours)
                .collect();
            let avg_hours = if hours.is_empty() {
                0.0
            } else {
                round_one_decimal(hours.iter().sum::<f64>() / hours.len() as f64)
            };
            PriorityResolution { priority, avg_hours }
        })
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
