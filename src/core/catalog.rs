use crate::domain::model::{default_catalog, Plan, SortDirection, SortDirective, SortKey};
use crate::utils::error::{Result, SiteError};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Holds the ordered plan catalog and derives the sorted comparison-table
/// view plus the single-slot detail selection that drives the plan dialog.
pub struct PlanCatalogEngine {
    plans: Vec<Plan>,
    sort: Option<SortDirective>,
    selected: Option<usize>,
    dialog_open: bool,
}

impl PlanCatalogEngine {
    /// Builds an engine over a caller-supplied catalog. Refuses to start on
    /// an id collision so a broken catalog never reaches the table.
    pub fn new(plans: Vec<Plan>) -> Result<Self> {
        let mut seen = HashSet::new();
        for plan in &plans {
            if !seen.insert(plan.id.as_str()) {
                return Err(SiteError::DuplicateIdError {
                    id: plan.id.clone(),
                });
            }
        }
        Ok(Self {
            plans,
            sort: None,
            selected: None,
            dialog_open: false,
        })
    }

    /// The four reference plans (Basic/Plus/Pro/Unlimited).
    pub fn with_default_catalog() -> Self {
        // 預設目錄的 id 是固定的，不可能重複
        Self::new(default_catalog()).unwrap_or_else(|_| unreachable!())
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn sort_directive(&self) -> Option<SortDirective> {
        self.sort
    }

    /// Toggles sort state for a column header click: same key flips the
    /// direction, a different key starts over at ascending.
    pub fn request_sort(&mut self, key: SortKey) {
        let direction = match self.sort {
            Some(SortDirective {
                key: current,
                direction: SortDirection::Ascending,
            }) if current == key => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        tracing::debug!("Sort directive: {:?} {:?}", key, direction);
        self.sort = Some(SortDirective { key, direction });
    }

    /// The catalog ordered by the active directive. The sort is stable over
    /// insertion order, so rows with equal key values never reshuffle.
    pub fn sorted_view(&self) -> Vec<&Plan> {
        let mut view: Vec<&Plan> = self.plans.iter().collect();
        if let Some(SortDirective { key, direction }) = self.sort {
            view.sort_by(|a, b| {
                let ordering = compare_by_key(a, b, key);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        view
    }

    /// Selects a plan for the detail dialog, replacing any prior selection.
    pub fn select_plan(&mut self, id: &str) -> Result<&Plan> {
        let index = self
            .plans
            .iter()
            .position(|plan| plan.id == id)
            .ok_or_else(|| SiteError::NotFoundError { id: id.to_string() })?;
        self.selected = Some(index);
        self.dialog_open = true;
        Ok(&self.plans[index])
    }

    pub fn selected_plan(&self) -> Option<&Plan> {
        self.selected.map(|index| &self.plans[index])
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Clears the selection and closes the dialog. Idempotent.
    pub fn close_detail(&mut self) {
        self.selected = None;
        self.dialog_open = false;
    }
}

// data_cap compares as a raw string, so "Unlimited" interleaves
// lexicographically with "300 GB". Matches the live table; see the
// sort_data_cap test before changing this.
fn compare_by_key(a: &Plan, b: &Plan, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::DownloadSpeed => a.download_speed.cmp(&b.download_speed),
        SortKey::UploadSpeed => a.upload_speed.cmp(&b.upload_speed),
        SortKey::DataCap => a.data_cap.cmp(&b.data_cap),
        SortKey::Price => a.price.total_cmp(&b.price),
    }
}
