//! Output side of the engine. Layout code emits into any `DrawSink`, so a
//! backend can consume instructions directly instead of collecting them.

use crate::model::DrawInstruction;

pub trait DrawSink {
    fn emit(&mut self, instruction: DrawInstruction);
}

impl DrawSink for Vec<DrawInstruction> {
    fn emit(&mut self, instruction: DrawInstruction) {
        Vec::push(self, instruction);
    }
}

