use crate::*;
pub use numbering::*;
pub use placement::*;
pub use random::*;

mod numbering;
mod placement;
mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: &GameConfig) -> Result<Minefield>;
}
