//! SVG rendering for rectangles, ovals, lines and shadows.

use svg::{Node, node::element as svg_element};

use vellum_core::{
    primitive::{LinePrimitive, ShapePrimitive},
    style::{ShadowDefinition, StrokeDefinition},
};

use super::SvgWriter;

impl SvgWriter {
    /// Renders a rectangle or, with `oval`, the ellipse inscribed in its bounds.
    pub(super) fn render_shape(
        &self,
        shape: &ShapePrimitive,
        oval: bool,
        filter_id: Option<&str>,
    ) -> Box<dyn Node> {
        let bounds = shape.bounds();

        if oval {
            let center = bounds.center();
            let element = svg_element::Ellipse::new()
                .set("cx", self.px(center.x()))
                .set("cy", self.px(center.y()))
                .set("rx", self.px(bounds.width() / 2.0))
                .set("ry", self.px(bounds.height() / 2.0));
            Box::new(self.paint_shape(element, shape, filter_id))
        } else {
            let element = svg_element::Rectangle::new()
                .set("x", self.px(bounds.min_x()))
                .set("y", self.px(bounds.min_y()))
                .set("width", self.px(bounds.width()))
                .set("height", self.px(bounds.height()));
            Box::new(self.paint_shape(element, shape, filter_id))
        }
    }

    /// Applies fill, border, rotation and shadow of `shape` to `element`.
    fn paint_shape<T: Node>(&self, mut element: T, shape: &ShapePrimitive, filter_id: Option<&str>) -> T {
        match shape.fill() {
            Some(fill) => {
                element.assign("fill", fill.color().to_hex());
                element.assign("fill-opacity", fill.opacity());
            }
            None => element.assign("fill", "none"),
        }

        match shape.border() {
            Some(border) => self.apply_stroke(&mut element, border),
            None => element.assign("stroke", "none"),
        }

        if shape.rotation() != 0.0 {
            let center = shape.bounds().center();
            element.assign(
                "transform",
                format!(
                    "rotate({} {} {})",
                    shape.rotation(),
                    self.px(center.x()),
                    self.px(center.y())
                ),
            );
        }

        if let Some(id) = filter_id {
            element.assign("filter", format!("url(#{id})"));
        }

        element
    }

    pub(super) fn render_line(&self, line: &LinePrimitive) -> svg_element::Line {
        let segment = line.segment();
        let start = segment.origin();
        let end = segment.end();

        let mut element = svg_element::Line::new()
            .set("x1", self.px(start.x()))
            .set("y1", self.px(start.y()))
            .set("x2", self.px(end.x()))
            .set("y2", self.px(end.y()));
        self.apply_stroke(&mut element, line.stroke());
        element
    }

    /// Sets the stroke attributes of `element`.
    ///
    /// Dash patterns are multiples of the stroke width.
    pub(super) fn apply_stroke<T: Node>(&self, element: &mut T, stroke: &StrokeDefinition) {
        let width = self.pt(stroke.width());

        element.assign("stroke", stroke.color().to_hex());
        element.assign("stroke-opacity", stroke.color().alpha());
        element.assign("stroke-width", width);

        if let Some(pattern) = stroke.style().dash_pattern() {
            let dasharray = pattern
                .iter()
                .map(|step| (step * width).to_string())
                .collect::<Vec<_>>()
                .join(",");
            element.assign("stroke-dasharray", dasharray);
        }
    }

    /// Creates the drop-shadow filter referenced as `url(#id)`.
    pub(super) fn shadow_filter(&self, id: &str, shadow: &ShadowDefinition) -> svg_element::Filter {
        let offset = shadow.offset_vector();

        let drop_shadow = svg_element::FilterEffectDropShadow::new()
            .set("dx", self.pt(offset.x()))
            .set("dy", self.pt(offset.y()))
            .set("stdDeviation", self.pt(shadow.blur()) / 2.0)
            .set("flood-color", shadow.color().to_hex())
            .set("flood-opacity", shadow.opacity());

        svg_element::Filter::new()
            .set("id", id)
            .set("x", "-20%")
            .set("y", "-20%")
            .set("width", "140%")
            .set("height", "140%")
            .add(drop_shadow)
    }
}
