// DOM mirror of `BoardView`. Cells are plain `div`s laid out by CSS grid in row-major order;
// each carries its display position in `data-pos` so clicks can be mapped back.

use itertools::Itertools;
use rookmeo_chess::board_view::BoardView;
use rookmeo_chess::display::{BoardOrientation, DisplayCoord};
use wasm_bindgen::JsCast;

use crate::rust_error;
use crate::web_element_ext::WebElementExt;
use crate::web_error_handling::JsResult;


pub const SQUARE_CLASS: &str = "square";
pub const HIGHLIGHT_CLASS: &str = "highlight";
pub const POS_ATTRIBUTE: &str = "data-pos";

pub fn create_board(container: &web_sys::Element) -> JsResult<()> {
    container.remove_all_children();
    for pos in DisplayCoord::all() {
        container
            .append_new_element("div")?
            .with_classes([SQUARE_CLASS, pos.shade().css_class()])?
            .with_attribute(POS_ATTRIBUTE, &pos.to_dom_pos())?;
    }
    Ok(())
}

fn board_cells(container: &web_sys::Element) -> JsResult<Vec<web_sys::Element>> {
    let cells = container
        .child_elements()
        .filter(|element| element.class_list().contains(SQUARE_CLASS))
        .collect_vec();
    if cells.len() != DisplayCoord::all().count() {
        return Err(rust_error!("Board has {} cells, expected 64", cells.len()));
    }
    Ok(cells)
}

pub fn sync_board(container: &web_sys::Element, view: &BoardView) -> JsResult<()> {
    for (element, cell) in board_cells(container)?.iter().zip_eq(view.cells()) {
        let glyph = cell.glyph().map(String::from);
        if element.text_content() != glyph {
            element.set_text_content(glyph.as_deref());
        }
        element.class_list().toggle_with_force(HIGHLIGHT_CLASS, cell.highlighted)?;
    }
    Ok(())
}

// Rotating the container flips the board; rotating each cell back keeps glyphs upright.
pub fn apply_orientation(container: &web_sys::Element, orientation: BoardOrientation) -> JsResult<()> {
    let transform = orientation.css_transform();
    container.set_transform(transform)?;
    for cell in board_cells(container)? {
        cell.set_transform(transform)?;
    }
    Ok(())
}

// Cell under the click, if any. Clicks on the gaps between cells have no position.
pub fn clicked_cell(event: &web_sys::MouseEvent) -> Option<DisplayCoord> {
    cell_of_target(&event.target()?)
}

pub fn cell_of_target(target: &web_sys::EventTarget) -> Option<DisplayCoord> {
    let element = target.dyn_ref::<web_sys::Element>()?;
    DisplayCoord::from_dom_pos(&element.get_attribute(POS_ATTRIBUTE)?)
}
