pub mod canvas_ui;
pub mod panel_trait;
pub mod table_ui;

pub use canvas_ui::CanvasPanel;
pub use panel_trait::{Panel, PanelState};
pub use table_ui::{table_rows, TablePanel};
