//! Immediate-mode drawing commands
//!
//! Renderers describe what to draw as a stream of [`DrawCommand`]s submitted
//! to a [`DrawContext`]. A context can also compile a command list into a
//! replayable program (a display list) that is later invoked through
//! [`DrawCommand::CallProgram`].

/// Handle to a compiled render program owned by a [`DrawContext`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    DepthTest,
    Blend,
    Lighting,
    RescaleNormal,
    PolygonOffsetFill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
    Quads,
    LineLoop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Plain,
    DropShadow,
}

/// Attribute groups saved by [`DrawCommand::PushAttrib`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttribMask {
    pub enable: bool,
    pub depth_buffer: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    PushMatrix,
    PopMatrix,
    /// Multiply the current matrix by a column-major 4x4 matrix
    MultMatrix([f64; 16]),
    Translate([f64; 3]),
    Scale([f64; 3]),
    /// Rotate by `degrees` about `axis`
    Rotate { degrees: f64, axis: [f64; 3] },
    PushAttrib(AttribMask),
    PopAttrib,
    Enable(Capability),
    Disable(Capability),
    /// Source-alpha / one-minus-source-alpha blending
    BlendAlpha,
    ShadeSmooth,
    PolygonOffset { factor: f32, units: f32 },
    LineWidth(f32),
    Color([f32; 4]),
    Begin(Primitive),
    End,
    Normal([f64; 3]),
    Vertex2([f64; 2]),
    Vertex3([f64; 3]),
    /// Planar arrow pointing along +x, centered on the origin
    Arrow2d {
        length: f64,
        width: f64,
        head_width: f64,
        body_width: f64,
        fill: bool,
    },
    /// Screen-aligned text anchored at a world position
    Text {
        position: [f64; 3],
        text: String,
        style: TextStyle,
    },
    CallProgram(ProgramHandle),
}

/// Sink for drawing commands, implemented by the host graphics backend
pub trait DrawContext {
    fn submit(&mut self, command: DrawCommand);

    /// Compile `commands` into a program that can be replayed later
    fn compile_program(&mut self, commands: Vec<DrawCommand>) -> ProgramHandle;
}

/// A [`DrawContext`] that records everything it receives
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    programs: Vec<Vec<DrawCommand>>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn program(&self, handle: ProgramHandle) -> Option<&[DrawCommand]> {
        self.programs.get(handle.0 as usize).map(Vec::as_slice)
    }

    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    /// Forget the submitted commands, keep compiled programs
    pub fn clear_frame(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn contains(&self, command: &DrawCommand) -> bool {
        self.commands.contains(command)
    }
}

impl DrawContext for CommandRecorder {
    fn submit(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn compile_program(&mut self, commands: Vec<DrawCommand>) -> ProgramHandle {
        self.programs.push(commands);
        ProgramHandle((self.programs.len() - 1) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_programs_and_frames() {
        let mut recorder = CommandRecorder::new();
        let handle = recorder.compile_program(vec![DrawCommand::PushMatrix, DrawCommand::PopMatrix]);
        recorder.submit(DrawCommand::CallProgram(handle));
        recorder.submit(DrawCommand::Text {
            position: [0.0; 3],
            text: "hi".to_string(),
            style: TextStyle::Plain,
        });

        assert_eq!(handle, ProgramHandle(0));
        assert_eq!(recorder.program(handle).unwrap().len(), 2);
        assert!(recorder.contains(&DrawCommand::CallProgram(handle)));
        assert_eq!(recorder.texts(), vec!["hi"]);

        recorder.clear_frame();
        assert!(recorder.commands().is_empty());
        assert_eq!(recorder.program_count(), 1);
    }
}
