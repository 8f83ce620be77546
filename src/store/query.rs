//! Query parameters for the table API: equality/range filters plus a single
//! ordering, rendered in the store's `column=op.value` form.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eq,
    Gte,
    Lte,
}

impl Op {
    fn keyword(&self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Gte => "gte",
            Op::Lte => "lte",
        }
    }
}

#[derive(Debug, Clone)]
struct Filter {
    column: String,
    op: Op,
    value: String,
}

#[derive(Debug, Clone, Default)]
pub struct Query {
    filters: Vec<Filter>,
    order: Option<(String, bool)>, // (column, ascending)
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push(Filter {
            column: column.to_string(),
            op: Op::Eq,
            value: value.to_string(),
        });
        self
    }

    pub fn gte(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push(Filter {
            column: column.to_string(),
            op: Op::Gte,
            value: value.to_string(),
        });
        self
    }

    pub fn lte(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push(Filter {
            column: column.to_string(),
            op: Op::Lte,
            value: value.to_string(),
        });
        self
    }

    pub fn order_asc(mut self, column: &str) -> Self {
        self.order = Some((column.to_string(), true));
        self
    }

    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some((column.to_string(), false));
        self
    }

    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        for filter in &self.filters {
            params.push((
                filter.column.clone(),
                format!("{}.{}", filter.op.keyword(), filter.value),
            ));
        }
        if let Some((column, ascending)) = &self.order {
            let direction = if *ascending { "asc" } else { "desc" };
            params.push(("order".to_string(), format!("{column}.{direction}")));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_query_selects_all() {
        assert_eq!(
            Query::new().to_params(),
            vec![("select".to_string(), "*".to_string())]
        );
    }

    #[test]
    fn test_filters_and_order_render_in_store_form() {
        let params = Query::new()
            .eq("service_date", "2025-06-01")
            .gte("donation_date", "2025-06-01")
            .lte("donation_date", "2025-06-30")
            .order_desc("donation_date")
            .to_params();

        assert_eq!(
            params,
            vec![
                ("select".to_string(), "*".to_string()),
                ("service_date".to_string(), "eq.2025-06-01".to_string()),
                ("donation_date".to_string(), "gte.2025-06-01".to_string()),
                ("donation_date".to_string(), "lte.2025-06-30".to_string()),
                ("order".to_string(), "donation_date.desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_order_asc() {
        let params = Query::new().order_asc("name").to_params();
        assert_eq!(params[1], ("order".to_string(), "name.asc".to_string()));
    }
}
