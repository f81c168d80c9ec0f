// src/application/queries/dashboard.rs
use crate::{
    application::{
        dto::{ApprovalBar, AuthenticatedUser, ChartPoint, DashboardDto},
        error::ApplicationResult,
        permissions::{ArticleAction, PermissionGuard},
    },
    domain::article::{Article, ArticleReadRepository},
};
use std::{collections::BTreeMap, sync::Arc};

pub struct DashboardQueryService {
    read_repo: Arc<dyn ArticleReadRepository>,
    guard: Arc<PermissionGuard>,
}

impl DashboardQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, guard: Arc<PermissionGuard>) -> Self {
        Self { read_repo, guard }
    }

    pub async fn dashboard(&self, actor: &AuthenticatedUser) -> ApplicationResult<DashboardDto> {
        self.guard.ensure(actor, ArticleAction::Dashboard).await?;

        let articles = self.read_repo.list_all().await?;
        Ok(summarize(&articles))
    }
}

fn department_label(article: &Article) -> String {
    format!("Department {}", article.department_id)
}

/// Department series come out in numeric department id order, months ascending.
pub(crate) fn summarize(articles: &[Article]) -> DashboardDto {
    let mut per_department: BTreeMap<i64, (String, u64, u64)> = BTreeMap::new();
    let mut topics_per_month: BTreeMap<String, u64> = BTreeMap::new();

    for article in articles {
        let entry = per_department
            .entry(article.department_id.into())
            .or_insert_with(|| (department_label(article), 0, 0));
        if article.is_approved {
            entry.1 += 1;
        } else {
            entry.2 += 1;
        }

        if article.is_topic {
            let month = article.created_at.format("%Y-%m").to_string();
            *topics_per_month.entry(month).or_default() += 1;
        }
    }

    DashboardDto {
        pie_chart_simplifys: per_department
            .values()
            .map(|(label, approved, pending)| ChartPoint {
                label: label.clone(),
                value: approved + pending,
            })
            .collect(),
        bar_chart_simplifys: per_department
            .into_values()
            .map(|(label, approved, pending)| ApprovalBar {
                label,
                approved,
                pending,
            })
            .collect(),
        line_chart_simplifys: topics_per_month
            .into_iter()
            .map(|(label, value)| ChartPoint { label, value })
            .collect(),
    }
}
