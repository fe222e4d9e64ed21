/// Instruction text sent alongside the image.
///
/// The descriptor is interpolated verbatim.
pub fn build_instruction(descriptor: &str) -> String {
    format!(
        "Transform this image into a {} cartoon. Maintain the composition but change the style completely. Return ONLY the image.",
        descriptor
    )
}
