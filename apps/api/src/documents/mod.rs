// Resume document store: upload → extract text → persist; list/get/delete.
// The matching engine only ever sees the extracted raw_text.

pub mod extraction;
pub mod handlers;
