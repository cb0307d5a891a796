//! Toolbar component showing applied filters, the result count, the active
//! sort and, when open, the filter prompt.

use crate::explorer::{AppliedFilter, FilterKind, ToolbarConfig};
use crate::i18n::Catalog;
use crate::tui::state::FilterPrompt;

use super::text_truncate::truncate_to_display_width_with_ellipsis;

/// Context for rendering the toolbar.
#[derive(Debug, Clone, Copy)]
pub struct ToolbarViewContext<'a> {
    /// Toolbar model owned by the explorer.
    pub toolbar: &'a ToolbarConfig,
    /// Catalog for fixed labels.
    pub catalog: &'a Catalog,
    /// Open filter prompt, if any.
    pub prompt: Option<&'a FilterPrompt>,
    /// Maximum line width in columns.
    pub max_width: usize,
}

/// Stateless toolbar renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolbarComponent;

impl ToolbarComponent {
    /// Number of lines [`Self::view`] renders for the given prompt state.
    #[must_use]
    pub const fn height(prompt_open: bool) -> usize {
        if prompt_open { 3 } else { 2 }
    }

    /// Renders the filter line, the sort line and the optional prompt line.
    #[must_use]
    pub fn view(ctx: &ToolbarViewContext<'_>) -> String {
        let lines = [
            Some(Self::filter_line(ctx)),
            Some(Self::sort_line(ctx)),
            Self::prompt_line(ctx),
        ];
        let mut output = String::new();
        for line in lines.into_iter().flatten() {
            output.push_str(&truncate_to_display_width_with_ellipsis(&line, ctx.max_width));
            output.push('\n');
        }
        output
    }

    fn filter_line(ctx: &ToolbarViewContext<'_>) -> String {
        let filter_config = &ctx.toolbar.filter_config;
        let applied = if filter_config.applied_filters.is_empty() {
            ctx.catalog.tr("none").to_owned()
        } else {
            filter_config
                .applied_filters
                .iter()
                .map(|filter| Self::filter_label(ctx, filter))
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "{}: {applied} ({} {})",
            ctx.catalog.tr("Filters"),
            filter_config.results_count,
            ctx.catalog.tr("Results"),
        )
    }

    fn filter_label(ctx: &ToolbarViewContext<'_>, filter: &AppliedFilter) -> String {
        let title = ctx
            .toolbar
            .filter_config
            .fields
            .iter()
            .find(|descriptor| descriptor.field == filter.field)
            .map_or_else(|| filter.field.title(), |descriptor| descriptor.title.as_str());
        format!("{title}: {}", filter.value)
    }

    fn sort_line(ctx: &ToolbarViewContext<'_>) -> String {
        let sort_config = &ctx.toolbar.sort_config;
        let title = sort_config.current_field().map_or_else(
            || sort_config.state.current_field.title(),
            |descriptor| descriptor.title.as_str(),
        );
        format!(
            "{}: {title} {}",
            ctx.catalog.tr("Sort"),
            sort_config.state.direction_arrow()
        )
    }

    fn prompt_line(ctx: &ToolbarViewContext<'_>) -> Option<String> {
        let prompt = ctx.prompt?;
        let descriptor = ctx
            .toolbar
            .filter_config
            .fields
            .iter()
            .find(|descriptor| descriptor.field == prompt.field())?;
        let line = match descriptor.kind {
            FilterKind::Text => format!("{}: {}_", descriptor.placeholder, prompt.input()),
            FilterKind::Select => format!(
                "{}: < {} >",
                descriptor.placeholder,
                prompt.value().unwrap_or_default()
            ),
        };
        Some(line)
    }
}
