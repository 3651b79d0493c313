// ============================================================================
// Board Profile Example
// Generates ShopBot profile programs for a catalog of boards
// ============================================================================
//
// Run with:
//     cargo run --example board_profile --features logging [output-dir]

use shopfrac::prelude::*;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Writes each program to `<dir>/<name>`
struct DirectorySink {
    dir: PathBuf,
}

impl ProgramSink for DirectorySink {
    fn emit(&mut self, name: &str, text: &str) -> io::Result<()> {
        fs::write(self.dir.join(name), text)
    }

    fn reset(&mut self) -> io::Result<()> {
        if self.dir.exists() {
            fs::remove_dir_all(&self.dir)?;
        }
        fs::create_dir_all(&self.dir)
    }
}

struct Board {
    name: &'static str,
    x: &'static str,
    y: &'static str,
    offset: &'static str,
    depth: &'static str,
    passes: i64,
}

impl Board {
    const fn new(name: &'static str, x: &'static str, y: &'static str) -> Self {
        Self {
            name,
            x,
            y,
            offset: "1",
            depth: "1/8",
            passes: 2,
        }
    }

    const fn offset(mut self, offset: &'static str) -> Self {
        self.offset = offset;
        self
    }

    const fn depth(mut self, depth: &'static str, passes: i64) -> Self {
        self.depth = depth;
        self.passes = passes;
        self
    }
}

const CATALOG: [Board; 5] = [
    Board::new("a", "8 1/16", "12").offset("11/16"),
    Board::new("b", "12", "12"),
    Board::new("c", "16 1/32", "12"),
    Board::new("d", "16", "12").depth("3/16", 3),
    Board::new("e", "20", "12").depth("3/16", 3),
];

const HEADER: &str = "
'Home Position Information = Bottom Left Corner, Material Surface
'Home X = 0.000000 Home Y = 0.000000 Home Z = 0.800000
'Rapid clearance gap or Safe Z = 0.200
'UNITS:Inches
'
IF %(25)=1 THEN GOTO UNIT_ERROR\t'check to see software is set to standard
SA                             \t'Set program to absolute coordinate mode
CN, 90
'New Path
'Toolpath Name = Profile 1 [1]
'Tool Name   = Ball Nose (1/2\")

&PWSafeZ = 0.200
&PWZorigin = Material Surface
&PWMaterial = 1.000
'&ToolName = \"Ball Nose (1/2\")\"
&Tool =8           'Tool number to change to
C9                   'Change tool
TR,11000               'Set spindle RPM
'
MS,0.7,0.125
JS,9,3
JZ,0.800000
C6                   'Spindle on
PAUSE 2
'
";

const FOOTER: &str = "
JZ,0.800000
'Turning router OFF
C7
J2,0.000000,0.000000
J3,42.000000,0.000000,0.800000
'
END
'
'
UNIT_ERROR:
CN, 91                            'Run file explaining unit error
END


";

fn move3(x: Fraction, y: Fraction, z: Fraction) -> FractionResult<String> {
    Ok(format!(
        "M3,{},{},{}",
        x.to_fixed(6)?,
        y.to_fixed(6)?,
        z.to_fixed(6)?
    ))
}

/// One rectangular pass around the board, entering on the left edge.
fn pass(
    board_x: Fraction,
    board_y: Fraction,
    offset: Fraction,
    depth: Fraction,
    start_depth: Fraction,
) -> FractionResult<String> {
    let x = board_x.subtract(offset)?;
    let y = board_y.subtract(offset)?;
    let y_half = y.divide(2)?;
    let y_75 = y.multiply("3/4")?;
    let o = offset.to_fixed(6)?;

    let moves = [
        move3(offset, offset, start_depth)?,
        move3(offset, y_half, depth)?,
        move3(offset, y, depth)?,
        move3(x, y, depth)?,
        move3(x, offset, depth)?,
        move3(offset, offset, depth)?,
        move3(offset, y_75, depth)?,
        move3(offset, y, Fraction::ZERO)?,
    ];

    Ok(format!(
        "'\nJZ,0.800000\nJ2,{o},{o}\n{}\n'",
        moves.join("\n")
    ))
}

fn program(board: &Board) -> FractionResult<String> {
    let x = fraction(board.x)?;
    let y = fraction(board.y)?;
    let offset = fraction(board.offset)?;
    let per_pass = fraction(board.depth)?
        .divide(board.passes)?
        .multiply(-1)?;

    let mut body = String::from("\n");
    for i in 0..board.passes {
        let depth = per_pass.multiply(i + 1)?;
        let depth_text = depth.to_fixed(6)?;
        tracing::info!(board = board.name, pass = i + 1, depth = %depth_text, "pass");
        body.push_str(&pass(x, y, offset, depth, per_pass.multiply(i)?)?);
    }
    body.push('\n');

    Ok(format!("{HEADER}{body}{FOOTER}"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("./group-n"));
    let mut sink = DirectorySink { dir };
    sink.reset()?;

    for board in &CATALOG {
        let text = program(board)?;
        sink.emit(&format!("{}.sbp", board.name), &text)?;
    }

    println!("Wrote {} programs to {}", CATALOG.len(), sink.dir.display());
    Ok(())
}
