pub mod chart_panel;
pub mod metric_cards;
