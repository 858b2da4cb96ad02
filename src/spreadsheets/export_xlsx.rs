use crate::domain::document::ResultDocument;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::Workbook;

/// Export the currently displayed (filtered + sorted) documents as a
/// downloadable worksheet.
pub fn export_documents_xlsx(documents: &[ResultDocument]) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    let headers = [
        "Address",
        "City",
        "State",
        "Zipcode",
        "Price",
        "Bedrooms",
        "Bathrooms",
        "Home Type",
        "Listing URL",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, document) in documents.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &document.street_address)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write address: {}", e)))?;

        worksheet
            .write_string(r, 1, &document.city)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write city: {}", e)))?;

        worksheet
            .write_string(r, 2, &document.state)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write state: {}", e)))?;

        worksheet
            .write_string(r, 3, &document.zipcode)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write zipcode: {}", e)))?;

        // Unknown prices (0) export as a blank cell rather than a fake $0.
        if document.price > 0 {
            worksheet
                .write_number(r, 4, document.price as f64)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write price: {}", e)))?;
        }

        worksheet
            .write_string(r, 5, &document.bedrooms)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write bedrooms: {}", e)))?;

        worksheet
            .write_string(r, 6, &document.bathrooms)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write bathrooms: {}", e)))?;

        worksheet
            .write_string(r, 7, &document.home_type)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write home type: {}", e)))?;

        worksheet
            .write_string(r, 8, &document.listing_url)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write listing url: {}", e)))?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to build workbook: {}", e)))?;

    xlsx_response(buffer, "properties.xlsx")
}
