/// Strip the `data:<mime>;base64,` prefix from an uploaded image.
///
/// Everything after the first comma is returned untouched. Input without a
/// comma is returned as-is; nothing here validates the MIME type or payload.
pub fn encode_image_contents(data_url: &str) -> &str {
    data_url
        .split_once(',')
        .map_or(data_url, |(_, payload)| payload)
}
