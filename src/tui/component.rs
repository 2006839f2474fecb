use std::io;

use super::surface::Surface;

/// Something that can draw itself onto a [`Surface`].
///
/// Components draw relative to wherever they keep their own origin, or at the
/// surface's current cursor when they have none (the registry legend follows
/// the menu frame this way).
pub trait Component {
    fn render(&self, surface: &mut dyn Surface) -> io::Result<()>;
}
