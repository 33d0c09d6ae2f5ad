use ratatui::layout::Rect;

/// Height of one currency panel including borders.
pub const PANEL_HEIGHT: u16 = 4;

pub struct Regions {
    pub header: Rect,
    pub source: Rect,
    pub swap: Rect,
    pub target: Rect,
    pub status: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };

    let mut cursor = area.y + header_height;
    let body_bottom = footer.y;
    let mut take = |height: u16| {
        let height = height.min(body_bottom.saturating_sub(cursor));
        let rect = Rect {
            x: area.x,
            y: cursor,
            width: area.width,
            height,
        };
        cursor += height;
        rect
    };

    let source = take(PANEL_HEIGHT);
    let swap = take(1);
    let target = take(PANEL_HEIGHT);
    let status = take(2);

    Regions {
        header,
        source,
        swap,
        target,
        status,
        footer,
    }
}

/// Rectangle of at most `width` x `height` centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
