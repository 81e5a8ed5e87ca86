/// Anatomical frame conventions and surgical planning parameters.
pub mod anatomy;

/// Marker, line, and plane sizing for scene output.
pub mod render_settings;
