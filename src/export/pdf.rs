// src/export/pdf.rs
//
// Minimal PDF 1.4 writer for the detail export. std-only, same spirit as the
// rest of the hand-rolled I/O layers: two base-14 Helvetica fonts, one
// colored header band on the first page, "label: value" body lines, a fresh
// page whenever vertical space runs out.

// Letter page, points.
const PAGE_W: f32 = 612.0;
const PAGE_H: f32 = 792.0;

const BAND_H: f32 = 50.0;
const MARGIN_X: f32 = 40.0;
const LINE_H: f32 = 15.0;
const BLOCK_GAP: f32 = 10.0;
const BOTTOM_Y: f32 = 40.0;

const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;

// Header band fill, 0..1 RGB (the dashboard's blue, #0058A3).
const BAND_RGB: (f32, f32, f32) = (0.0, 0.345, 0.639);

/// Render the full document. `blocks` is one (label, value) list per record;
/// empty values are expected to be filtered out by the caller.
pub fn render(title: &str, blocks: &[Vec<(String, String)>]) -> Vec<u8> {
    let streams = build_content_streams(title, blocks);
    assemble(&streams)
}

/* ---------------- Content streams ---------------- */

fn build_content_streams(title: &str, blocks: &[Vec<(String, String)>]) -> Vec<Vec<u8>> {
    let mut pages: Vec<Vec<u8>> = Vec::new();
    let mut page = first_page_prelude(title);

    // Body starts below the band on page one, near the top on later pages.
    let mut y = PAGE_H - BAND_H - 20.0;

    for block in blocks {
        for (label, value) in block {
            if y < BOTTOM_Y {
                pages.push(std::mem::take(&mut page));
                y = PAGE_H - BOTTOM_Y;
            }
            body_line(&mut page, y, &format!("{label}: {value}"));
            y -= LINE_H;
        }
        y -= BLOCK_GAP;
    }

    pages.push(page);
    pages
}

fn first_page_prelude(title: &str) -> Vec<u8> {
    let mut out = Vec::new();
    let (r, g, b) = BAND_RGB;

    // band
    out.extend_from_slice(
        format!(
            "{r:.3} {g:.3} {b:.3} rg\n0 {:.1} {PAGE_W:.1} {BAND_H:.1} re\nf\n",
            PAGE_H - BAND_H
        )
        .as_bytes(),
    );

    // centered-ish title (Helvetica averages about half an em per glyph)
    let est_w = 0.5 * TITLE_SIZE * title.chars().count() as f32;
    let x = ((PAGE_W - est_w) / 2.0).max(MARGIN_X);
    let y = PAGE_H - 30.0;
    out.extend_from_slice(format!("BT\n/F2 {TITLE_SIZE:.0} Tf\n1 1 1 rg\n{x:.1} {y:.1} Td\n").as_bytes());
    write_text(&mut out, title);
    out.extend_from_slice(b" Tj\nET\n");

    out
}

fn body_line(out: &mut Vec<u8>, y: f32, text: &str) {
    out.extend_from_slice(
        format!("BT\n/F1 {BODY_SIZE:.0} Tf\n0 0 0 rg\n{MARGIN_X:.1} {y:.1} Td\n").as_bytes(),
    );
    write_text(out, text);
    out.extend_from_slice(b" Tj\nET\n");
}

/// Emit a PDF literal string: parentheses/backslash escaped, characters
/// encoded as WinAnsi (Latin-1 range passes through, the rest becomes '?').
fn write_text(out: &mut Vec<u8>, text: &str) {
    out.push(b'(');
    for ch in text.chars() {
        match ch {
            '(' => out.extend_from_slice(b"\\("),
            ')' => out.extend_from_slice(b"\\)"),
            '\\' => out.extend_from_slice(b"\\\\"),
            c if (c as u32) < 0x80 => out.push(c as u8),
            c if (0xa0..=0xff).contains(&(c as u32)) => out.push(c as u32 as u8),
            _ => out.push(b'?'),
        }
    }
    out.push(b')');
}

/* ---------------- Document assembly ---------------- */

// Object layout: 1 catalog, 2 pages, 3 /F1, 4 /F2, then per page a content
// stream object followed by its page object.

fn assemble(streams: &[Vec<u8>]) -> Vec<u8> {
    let n_pages = streams.len();
    let n_objs = 4 + 2 * n_pages;

    let mut buf: Vec<u8> = Vec::new();
    let mut offsets: Vec<usize> = vec![0; n_objs + 1];
    buf.extend_from_slice(b"%PDF-1.4\n");

    let page_id = |i: usize| 6 + 2 * i; // content is page_id - 1

    // 1: catalog
    begin_obj(&mut buf, &mut offsets, 1);
    buf.extend_from_slice(b"<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    // 2: page tree
    begin_obj(&mut buf, &mut offsets, 2);
    let kids: Vec<String> = (0..n_pages).map(|i| format!("{} 0 R", page_id(i))).collect();
    buf.extend_from_slice(
        format!("<< /Type /Pages /Kids [ {} ] /Count {} >>\nendobj\n", kids.join(" "), n_pages)
            .as_bytes(),
    );

    // 3, 4: fonts
    for (id, name) in [(3, "Helvetica"), (4, "Helvetica-Bold")] {
        begin_obj(&mut buf, &mut offsets, id);
        buf.extend_from_slice(
            format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{name} /Encoding /WinAnsiEncoding >>\nendobj\n"
            )
            .as_bytes(),
        );
    }

    for (i, stream) in streams.iter().enumerate() {
        let cid = page_id(i) - 1;

        begin_obj(&mut buf, &mut offsets, cid);
        buf.extend_from_slice(format!("<< /Length {} >>\nstream\n", stream.len()).as_bytes());
        buf.extend_from_slice(stream);
        buf.extend_from_slice(b"\nendstream\nendobj\n");

        begin_obj(&mut buf, &mut offsets, page_id(i));
        buf.extend_from_slice(
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_W:.0} {PAGE_H:.0}] \
                 /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {cid} 0 R >>\nendobj\n"
            )
            .as_bytes(),
        );
    }

    // xref + trailer
    let xref_at = buf.len();
    buf.extend_from_slice(format!("xref\n0 {}\n", n_objs + 1).as_bytes());
    buf.extend_from_slice(b"0000000000 65535 f\r\n");
    for id in 1..=n_objs {
        buf.extend_from_slice(format!("{:010} 00000 n\r\n", offsets[id]).as_bytes());
    }
    buf.extend_from_slice(
        format!("trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n", n_objs + 1)
            .as_bytes(),
    );

    buf
}

fn begin_obj(buf: &mut Vec<u8>, offsets: &mut [usize], id: usize) {
    offsets[id] = buf.len();
    buf.extend_from_slice(format!("{id} 0 obj\n").as_bytes());
}
