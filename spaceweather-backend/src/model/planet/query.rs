//! Listing engine: filter, sort, paginate and project a store snapshot.
//!
//! Everything here is a pure function of `(snapshot, query)`. Unknown sort
//! fields and filter terms that match nothing are tolerated; only page/size
//! below 1 and a structurally broken sort spec are rejected.

use std::cmp::Ordering;

use spaceweather_common::{ListParams, PlanetDto};

use super::types::Planet;
use crate::error::{PlanetError, PlanetResult};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// One listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetQuery {
    /// 1-based page number
    pub page: i64,
    pub size: i64,
    pub filter: Option<String>,
    pub sort: Option<String>,
}

impl Default for PlanetQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            filter: None,
            sort: None,
        }
    }
}

impl From<ListParams> for PlanetQuery {
    fn from(params: ListParams) -> Self {
        Self {
            page: params.page.unwrap_or(DEFAULT_PAGE),
            size: params.size.unwrap_or(DEFAULT_PAGE_SIZE),
            filter: params.status,
            sort: params.sort,
        }
    }
}

impl PlanetQuery {
    pub fn page(mut self, page: i64, size: i64) -> Self {
        self.page = page;
        self.size = size;
        self
    }

    pub fn filter(mut self, term: impl Into<String>) -> Self {
        self.filter = Some(term.into());
        self
    }

    pub fn sort(mut self, spec: impl Into<String>) -> Self {
        self.sort = Some(spec.into());
        self
    }

    /// Reject inputs that cannot be executed, before any store access
    pub fn validate(&self) -> PlanetResult<()> {
        if self.page < 1 {
            return Err(PlanetError::InvalidQuery(format!(
                "page must be at least 1, got {}",
                self.page
            )));
        }
        if self.size < 1 {
            return Err(PlanetError::InvalidQuery(format!(
                "size must be at least 1, got {}",
                self.size
            )));
        }
        SortSpec::parse(self.sort.as_deref())?;
        Ok(())
    }
}

/// Parsed filter term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilter {
    /// Lowercased term matched as a substring of the planet name
    needle: String,
    /// Set when the term is the `active` / `inactive` shorthand
    active: Option<bool>,
}

impl StatusFilter {
    /// `None` for an absent or blank term, which means "no filtering"
    pub fn parse(term: Option<&str>) -> Option<Self> {
        let term = term?;
        if term.trim().is_empty() {
            return None;
        }

        let needle = term.to_lowercase();
        let active = match needle.as_str() {
            "active" => Some(true),
            "inactive" => Some(false),
            _ => None,
        };

        Some(Self { needle, active })
    }

    pub fn matches(&self, planet: &Planet) -> bool {
        if self.active == Some(planet.is_active) {
            return true;
        }
        planet.name.to_lowercase().contains(&self.needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortField {
    Name,
    Id,
    CreatedDate,
    /// Anything else; leaves the order untouched
    Unrecognized(String),
}

impl SortField {
    fn parse(field: &str) -> Self {
        match field.to_lowercase().as_str() {
            "name" => SortField::Name,
            "id" => SortField::Id,
            "created_date" => SortField::CreatedDate,
            other => SortField::Unrecognized(other.to_string()),
        }
    }

    fn compare(&self, a: &Planet, b: &Planet) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Id => a.id.cmp(&b.id),
            SortField::CreatedDate => a.created_date.cmp(&b.created_date),
            SortField::Unrecognized(_) => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only `desc` (any case) sorts descending
    fn parse(order: &str) -> Self {
        if order.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// Parsed `field[,order]` sort spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    /// `Ok(None)` for an absent or blank spec
    pub fn parse(spec: Option<&str>) -> PlanetResult<Option<Self>> {
        let Some(spec) = spec else {
            return Ok(None);
        };
        if spec.trim().is_empty() {
            return Ok(None);
        }

        let parts: Vec<&str> = spec.split(',').collect();
        if parts.len() > 2 {
            return Err(PlanetError::InvalidQuery(format!(
                "sort must look like field[,order], got '{}'",
                spec
            )));
        }

        Ok(Some(Self {
            field: SortField::parse(parts[0].trim()),
            order: parts.get(1).map(|o| SortOrder::parse(o)).unwrap_or_default(),
        }))
    }

    /// Stable in both directions: ties keep their incoming order
    pub fn apply(&self, planets: &mut [&Planet]) {
        if let SortField::Unrecognized(_) = self.field {
            return;
        }

        match self.order {
            SortOrder::Asc => planets.sort_by(|a, b| self.field.compare(a, b)),
            SortOrder::Desc => planets.sort_by(|a, b| self.field.compare(b, a)),
        }
    }
}

/// One page of listing results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPage {
    pub items: Vec<PlanetDto>,
    /// Matches after filtering, before pagination
    pub total_count: usize,
    pub page: i64,
    pub size: i64,
}

impl QueryPage {
    pub fn pages_available(&self) -> usize {
        let size = usize::try_from(self.size).unwrap_or(usize::MAX);
        self.total_count.div_ceil(size.max(1))
    }
}

/// Run `query` against a snapshot
pub fn execute(snapshot: &[Planet], query: &PlanetQuery) -> PlanetResult<QueryPage> {
    query.validate()?;

    let filter = StatusFilter::parse(query.filter.as_deref());
    let sort = SortSpec::parse(query.sort.as_deref())?;

    let mut matched: Vec<&Planet> = snapshot
        .iter()
        .filter(|p| filter.as_ref().is_none_or(|f| f.matches(p)))
        .collect();

    if let Some(sort) = &sort {
        sort.apply(&mut matched);
    }

    let total_count = matched.len();
    let skip = usize::try_from((query.page - 1).saturating_mul(query.size)).unwrap_or(usize::MAX);
    let take = usize::try_from(query.size).unwrap_or(usize::MAX);

    let items = matched
        .into_iter()
        .skip(skip)
        .take(take)
        .map(Planet::to_dto)
        .collect();

    Ok(QueryPage {
        items,
        total_count,
        page: query.page,
        size: query.size,
    })
}
