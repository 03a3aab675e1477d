use crate::base;

pub const FILENAME: &str = "log_tissue_dan_rekap.xlsx";
pub const MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const SHEET_NAME: &str = "Log Tissue";
const TITLE: &str = "Log Tissue dan Rekap";
const OUTBOUND_HEADER: [&str; 2] = ["Pengeluaran", "Jumlah"];
const INBOUND_HEADER: [&str; 2] = ["Pemasukan", "Jumlah"];
const STOCK_HEADER: [&str; 2] = ["Jenis", "Stok"];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Renders the whole record table followed by the recap and stock blocks of
/// `report` as an in-memory workbook.
pub fn render(rl: &base::Recordlist, report: &base::Report) -> Result<Vec<u8>, ExportError> {
    use base::Layout;

    let layout = Layout::new(rl.len(), &report.summaries);
    let bold = rust_xlsxwriter::Format::new().set_bold();
    let title = rust_xlsxwriter::Format::new()
        .set_bold()
        .set_font_size(14)
        .set_align(rust_xlsxwriter::FormatAlign::Center);

    let mut wb = rust_xlsxwriter::Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name(SHEET_NAME)?;
    for (col, width) in Layout::COLUMN_WIDTHS.into_iter().enumerate() {
        ws.set_column_width(col as u16, width)?;
    }

    ws.merge_range(
        Layout::TITLE_ROW,
        0,
        Layout::TITLE_ROW,
        Layout::COLUMNS - 1,
        TITLE,
        &title,
    )?;

    for (col, name) in base::store::HEADER.into_iter().enumerate() {
        ws.write_string_with_format(Layout::HEADER_ROW, col as u16, name, &bold)?;
    }
    for (row, r) in (layout.first_record_row()..).zip(rl.iter()) {
        let r = r.to_row();
        ws.write_string(row, 0, r.category)?;
        ws.write_string(row, 1, r.date)?;
        ws.write_string(row, 2, r.weekday)?;
        ws.write_string(row, 3, r.shift)?;
        ws.write_number(row, 4, r.outbound.0 as f64)?;
        ws.write_number(row, 5, r.inbound.0 as f64)?;
    }

    let recap = layout.recap_start_row();
    for (col, summaries, header) in [
        (
            Layout::LEFT_BLOCK_COL,
            &report.summaries.outbound,
            OUTBOUND_HEADER,
        ),
        (
            Layout::RIGHT_BLOCK_COL,
            &report.summaries.inbound,
            INBOUND_HEADER,
        ),
    ] {
        ws.write_string_with_format(recap, col, header[0], &bold)?;
        ws.write_string_with_format(recap, col + 1, header[1], &bold)?;
        for (row, s) in (recap + 1..).zip(summaries.iter()) {
            ws.write_string(row, col, s.category.as_str())?;
            ws.write_number(row, col + 1, s.total.0 as f64)?;
        }
    }

    let stock = layout.stock_start_row();
    ws.write_string_with_format(stock, 0, STOCK_HEADER[0], &bold)?;
    ws.write_string_with_format(stock, 1, STOCK_HEADER[1], &bold)?;
    for (row, level) in (stock + 1..).zip(report.levels.iter()) {
        ws.write_string(row, 0, level.category().as_str())?;
        ws.write_number(row, 1, level.net_stock() as f64)?;
    }

    let buf = wb.save_to_buffer()?;
    tracing::debug!(
        records = rl.len(),
        recap_start_row = recap,
        stock_start_row = stock,
        bytes = buf.len(),
        "report rendered"
    );
    Ok(buf)
}
