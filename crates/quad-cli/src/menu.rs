//! Interactive menu driving a [`RouteService`].
//!
//! Input and output are generic so the loop can be exercised with in-memory
//! buffers.

use anyhow::Result;
use quad_core::{parse_values, RouteError, RouteService};
use std::io::{BufRead, Write};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    SetArea,
    AddTransmitter,
    ListTransmitters,
    SetStart,
    SetEnd,
    CheckRoute,
    Exit,
}

impl MenuOption {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "1" => Some(Self::SetArea),
            "2" => Some(Self::AddTransmitter),
            "3" => Some(Self::ListTransmitters),
            "4" => Some(Self::SetStart),
            "5" => Some(Self::SetEnd),
            "6" => Some(Self::CheckRoute),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Output switches for the menu loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuOptions {
    /// Print route reports as JSON
    pub json: bool,
    /// Clear the terminal before redrawing the menu
    pub clear_screen: bool,
}

pub struct Menu<R, W> {
    service: RouteService,
    input: R,
    output: W,
    options: MenuOptions,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(service: RouteService, input: R, output: W, options: MenuOptions) -> Self {
        Self {
            service,
            input,
            output,
            options,
        }
    }

    pub fn service(&self) -> &RouteService {
        &self.service
    }

    /// Run until the user picks exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(key) = self.prompt("\nChoose option: ")? else {
                break;
            };
            let Some(option) = MenuOption::from_key(&key) else {
                writeln!(self.output, "You have chosen an invalid option: '{}'", key.trim())?;
                if !self.pause()? {
                    break;
                }
                continue;
            };
            if option == MenuOption::Exit {
                break;
            }
            if !self.dispatch(option)? || !self.pause()? {
                break;
            }
        }
        tracing::debug!("Menu loop finished");
        Ok(())
    }

    /// Execute one menu action. Returns `false` once input is exhausted.
    pub fn dispatch(&mut self, option: MenuOption) -> Result<bool> {
        match option {
            MenuOption::SetArea => {
                let Some(x) = self.prompt("Set X-coordinates for area in the format 'x_min x_max': ")?
                else {
                    return Ok(false);
                };
                let Some(y) = self.prompt("Set Y-coordinates for area in the format 'y_min y_max': ")?
                else {
                    return Ok(false);
                };
                let outcome = parse_values(&x, 2).and_then(|x| {
                    let y = parse_values(&y, 2)?;
                    self.service.set_area(x[0], x[1], y[0], y[1])
                });
                self.report(outcome, |area| {
                    format!("Area coordinates were successfully set to: {area}")
                })?;
            }
            MenuOption::AddTransmitter => {
                let Some(line) =
                    self.prompt("Set values for a new transmitter in the format 'x y p': ")?
                else {
                    return Ok(false);
                };
                let outcome = parse_values(&line, 3)
                    .and_then(|v| self.service.add_transmitter(v[0], v[1], v[2]));
                self.report(outcome, |t| {
                    format!("Transmitter with values: {t} was added successfully")
                })?;
            }
            MenuOption::ListTransmitters => {
                let listed: Vec<String> = self
                    .service
                    .list_transmitters()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                writeln!(self.output, "[{}]", listed.join(", "))?;
            }
            MenuOption::SetStart => {
                let Some(line) =
                    self.prompt("Set values for starting point in the format 'x y': ")?
                else {
                    return Ok(false);
                };
                let outcome =
                    parse_values(&line, 2).and_then(|v| self.service.set_start(v[0], v[1]));
                self.report(outcome, |p| {
                    format!("Starting point was successfully set to: {p}")
                })?;
            }
            MenuOption::SetEnd => {
                let Some(line) = self.prompt("Set values for ending point in the format 'x y': ")?
                else {
                    return Ok(false);
                };
                let outcome =
                    parse_values(&line, 2).and_then(|v| self.service.set_end(v[0], v[1]));
                self.report(outcome, |p| format!("Ending point was successfully set to: {p}"))?;
            }
            MenuOption::CheckRoute => self.print_route()?,
            MenuOption::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn print_route(&mut self) -> Result<()> {
        if self.options.json {
            let report = self.service.route_report();
            writeln!(self.output, "{}", serde_json::to_string_pretty(&report)?)?;
            return Ok(());
        }

        match self.service.check_route() {
            Ok(paths) => {
                writeln!(self.output, "There is a safe path for quadcopter:")?;
                for path in paths {
                    let hops: Vec<String> = path.iter().map(ToString::to_string).collect();
                    writeln!(self.output, "[{}]", hops.join(", "))?;
                }
            }
            Err(e) => {
                if matches!(e, RouteError::PointUncovered(_)) {
                    writeln!(
                        self.output,
                        "Starting and ending points are outside any of given transmitters range"
                    )?;
                }
                writeln!(self.output, "{e}")?;
            }
        }
        Ok(())
    }

    fn report<T>(
        &mut self,
        outcome: std::result::Result<T, RouteError>,
        success: impl FnOnce(&T) -> String,
    ) -> Result<()> {
        match outcome {
            Ok(value) => writeln!(self.output, "{}", success(&value))?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        if self.options.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        writeln!(self.output, "1. Set the area coordinates")?;
        writeln!(self.output, "2. Add new transmitter")?;
        writeln!(self.output, "3. Get all transmitters")?;
        writeln!(self.output, "4. Set a starting point")?;
        writeln!(self.output, "5. Set an ending point")?;
        writeln!(self.output, "6. Check for a safe path for quadcopter")?;
        writeln!(self.output, "0. Exit")?;
        Ok(())
    }

    fn pause(&mut self) -> Result<bool> {
        Ok(self.prompt("\nPress Enter to get back to menu")?.is_some())
    }

    /// Print `message` and read one line. `None` means end of input.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so a garbled line
    /// fails integer parsing like any other bad input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
