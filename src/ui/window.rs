//! Native calculator window implemented with raw Win32 controls.
//!
//! The window owns two `EDIT` operand fields, one `BUTTON` per operation and
//! a `STATIC` result label. Button clicks arrive as `WM_COMMAND` messages and
//! are translated through a fixed control-id table into calculator events.

#![allow(unsafe_op_in_unsafe_fn)]

use tracing::{debug, error, info};
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{GetLastError, HINSTANCE, HWND, LPARAM, LRESULT, RECT, WIN32_ERROR, WPARAM};
use windows::Win32::Graphics::Gdi::{GetStockObject, UpdateWindow, DEFAULT_GUI_FONT, HBRUSH, HFONT, WHITE_BRUSH};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::*;

use crate::app::controller::{Calculator, CalculatorEvent};
use crate::app::fields::{InputField, OutputField};
use crate::config::layout::{Side, WindowLayout};
use crate::domain::core::Rect;
use crate::domain::operation::Operation;

const ID_EDIT_LEFT: i32 = 100;
const ID_EDIT_RIGHT: i32 = 101;
const ID_RESULT_LABEL: i32 = 102;

/// Control id of each trigger button
const TRIGGER_IDS: [(i32, Operation); 4] = [
    (200, Operation::Add),
    (201, Operation::Subtract),
    (202, Operation::Multiply),
    (203, Operation::Divide),
];

// Matches the Win32 ERROR_CLASS_ALREADY_EXISTS (1410) code.
const CLASS_ALREADY_EXISTS_ERR: WIN32_ERROR = WIN32_ERROR(1410);

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Failed to register calculator window class")]
    ClassRegistrationFailed,
    #[error("Failed to create calculator window")]
    WindowCreationFailed,
    #[error("Failed to create {0} control")]
    ControlCreationFailed(&'static str),
    #[error("Windows API error: {0}")]
    Win32Error(String),
}

/// Operand field backed by an `EDIT` control
#[derive(Debug, Clone, Copy)]
pub struct EditField(HWND);

impl InputField for EditField {
    fn text(&self) -> String {
        read_control_text(self.0)
    }
}

/// Result field backed by a `STATIC` control
#[derive(Debug, Clone, Copy)]
pub struct LabelField(HWND);

impl OutputField for LabelField {
    fn set_text(&self, text: &str) {
        set_control_text(self.0, text);
    }
}

/// Top-level calculator window
///
/// Dropping the handle destroys the window if it is still alive.
pub struct CalculatorWindow {
    state: *mut WindowState,
}

struct WindowState {
    hwnd: HWND,
    layout: WindowLayout,
    font: HFONT,
    calculator: Option<Calculator<EditField, EditField, LabelField>>,
    /// Set by `WM_CREATE` when the child controls could not be built
    creation_error: Option<WindowError>,
}

impl CalculatorWindow {
    /// Creates and shows the window using a sanitized copy of `layout`
    pub fn open(layout: &WindowLayout) -> Result<Self, WindowError> {
        let state = WindowState {
            hwnd: HWND(0),
            layout: layout.sanitized(),
            font: unsafe { HFONT(GetStockObject(DEFAULT_GUI_FONT).0) },
            calculator: None,
            creation_error: None,
        };
        let state_ptr = Box::into_raw(Box::new(state));

        unsafe {
            if let Err(err) = create_main_window(state_ptr) {
                let _ = Box::from_raw(state_ptr);
                return Err(err);
            }
            ShowWindow((*state_ptr).hwnd, SW_SHOW);
            UpdateWindow((*state_ptr).hwnd);
        }

        info!("Calculator window opened");
        Ok(Self { state: state_ptr })
    }

    /// Pumps messages until the window is closed
    pub fn run(&mut self) -> Result<(), WindowError> {
        unsafe {
            let mut msg = MSG::default();
            loop {
                let status = GetMessageW(&mut msg, None, 0, 0);
                if status.0 == -1 {
                    return Err(WindowError::Win32Error(format!(
                        "{:?}",
                        windows::core::Error::from_win32()
                    )));
                }
                if status.0 == 0 {
                    break;
                }

                let hwnd = (*self.state).hwnd;
                if hwnd.0 == 0 || !IsDialogMessageW(hwnd, &msg).as_bool() {
                    TranslateMessage(&msg);
                    DispatchMessageW(&msg);
                }
            }
        }

        info!("Calculator window closed");
        Ok(())
    }
}

impl Drop for CalculatorWindow {
    fn drop(&mut self) {
        unsafe {
            let hwnd = (*self.state).hwnd;
            if hwnd.0 != 0 && IsWindow(hwnd).as_bool() {
                let _ = DestroyWindow(hwnd);
            }
            let _ = Box::from_raw(self.state);
        }
    }
}

fn create_main_window(state_ptr: *mut WindowState) -> Result<(), WindowError> {
    unsafe {
        let module = GetModuleHandleW(PCWSTR::null())
            .map_err(|e| WindowError::Win32Error(format!("{:?}", e)))?;
        let instance: HINSTANCE = module.into();

        register_window_class(instance)?;

        let style = WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU | WS_MINIMIZEBOX;
        let (client_width, client_height) = (*state_ptr).layout.client_size();
        let mut frame = RECT {
            left: 0,
            top: 0,
            right: client_width,
            bottom: client_height,
        };
        AdjustWindowRect(&mut frame, style, false)
            .map_err(|e| WindowError::Win32Error(format!("{:?}", e)))?;

        let title = to_wstring(&(*state_ptr).layout.title);
        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE(WS_EX_CONTROLPARENT.0),
            w!("BasicCalculatorWindow"),
            PCWSTR(title.as_ptr()),
            style,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            frame.right - frame.left,
            frame.bottom - frame.top,
            None,
            None,
            instance,
            Some(state_ptr as *const std::ffi::c_void),
        );

        (*state_ptr).hwnd = creation_result(hwnd, (*state_ptr).creation_error.take())?;
        Ok(())
    }
}

fn register_window_class(instance: HINSTANCE) -> Result<(), WindowError> {
    unsafe {
        let wnd_class = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(window_proc),
            hInstance: instance,
            hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
            hbrBackground: HBRUSH(GetStockObject(WHITE_BRUSH).0),
            lpszClassName: w!("BasicCalculatorWindow"),
            ..Default::default()
        };

        if RegisterClassW(&wnd_class) == 0 {
            match GetLastError() {
                Err(err) if err.code() == CLASS_ALREADY_EXISTS_ERR.to_hresult() => {}
                _ => return Err(WindowError::ClassRegistrationFailed),
            }
        }
    }

    Ok(())
}

unsafe extern "system" fn window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_CREATE => {
            let createstruct = &*(lparam.0 as *const CREATESTRUCTW);
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, createstruct.lpCreateParams as isize);
            if let Some(state) = window_state_mut(hwnd) {
                state.hwnd = hwnd;
                if let Err(err) = state.build_controls() {
                    error!(%err, "Failed to build calculator controls");
                    state.creation_error = Some(err);
                    return LRESULT(-1);
                }
            }
            LRESULT(0)
        }
        WM_COMMAND => {
            if let Some(state) = window_state_mut(hwnd) {
                state.handle_command(wparam);
            }
            LRESULT(0)
        }
        WM_DESTROY => {
            // Only a window whose WM_CREATE succeeded ends the message loop.
            if let Some(state) = window_state_mut(hwnd) {
                state.hwnd = HWND(0);
                if state.calculator.take().is_some() {
                    PostQuitMessage(0);
                }
            }
            LRESULT(0)
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

unsafe fn window_state_mut(hwnd: HWND) -> Option<&'static mut WindowState> {
    let ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut WindowState;
    if ptr.is_null() {
        None
    } else {
        Some(&mut *ptr)
    }
}

impl WindowState {
    fn build_controls(&mut self) -> Result<(), WindowError> {
        let left = create_edit(self.hwnd, self.font, ID_EDIT_LEFT, self.layout.field_rect(Side::Left))
            .ok_or(WindowError::ControlCreationFailed("left operand"))?;
        let right = create_edit(self.hwnd, self.font, ID_EDIT_RIGHT, self.layout.field_rect(Side::Right))
            .ok_or(WindowError::ControlCreationFailed("right operand"))?;

        for (id, operation) in TRIGGER_IDS {
            create_button(
                self.hwnd,
                self.font,
                id,
                operation.symbol(),
                self.layout.button_rect(operation),
            )
            .ok_or(WindowError::ControlCreationFailed(operation.role()))?;
        }

        let result = create_label(self.hwnd, self.font, ID_RESULT_LABEL, self.layout.result_rect())
            .ok_or(WindowError::ControlCreationFailed("result"))?;

        self.calculator = Some(Calculator::new(
            EditField(left),
            EditField(right),
            LabelField(result),
        ));
        debug!("Calculator controls created");
        Ok(())
    }

    fn handle_command(&self, wparam: WPARAM) {
        let command_id = (wparam.0 & 0xFFFF) as i32;
        let notify_code = ((wparam.0 >> 16) & 0xFFFF) as u16;
        if notify_code != BN_CLICKED as u16 {
            return;
        }

        let (Some(operation), Some(calculator)) =
            (operation_for_command(command_id), self.calculator.as_ref())
        else {
            return;
        };

        calculator.handle_event(CalculatorEvent::Activated(operation));
    }
}

/// Resolves the outcome of `CreateWindowExW`
///
/// A null handle reports the error recorded during `WM_CREATE` when there
/// is one, so control failures are not flattened into a generic error.
fn creation_result(hwnd: HWND, creation_error: Option<WindowError>) -> Result<HWND, WindowError> {
    if hwnd.0 != 0 {
        return Ok(hwnd);
    }
    Err(creation_error.unwrap_or(WindowError::WindowCreationFailed))
}

/// Maps a `WM_COMMAND` control id to the operation it triggers
fn operation_for_command(command_id: i32) -> Option<Operation> {
    TRIGGER_IDS
        .iter()
        .find(|(id, _)| *id == command_id)
        .map(|(_, operation)| *operation)
}

fn apply_font(hwnd: HWND, font: HFONT) {
    unsafe {
        SendMessageW(hwnd, WM_SETFONT, WPARAM(font.0 as usize), LPARAM(1));
    }
}

fn create_child(
    parent: HWND,
    font: HFONT,
    class: PCWSTR,
    style_bits: u32,
    id: i32,
    rect: Rect,
) -> Option<HWND> {
    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE(0),
            class,
            PCWSTR::null(),
            WINDOW_STYLE(WS_CHILD.0 | WS_VISIBLE.0 | style_bits),
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            parent,
            HMENU(id as isize),
            None,
            None,
        )
    };
    if hwnd.0 == 0 {
        return None;
    }
    apply_font(hwnd, font);
    Some(hwnd)
}

fn create_edit(parent: HWND, font: HFONT, id: i32, rect: Rect) -> Option<HWND> {
    let style_bits = WS_BORDER.0 | WS_TABSTOP.0 | (ES_LEFT as u32) | (ES_AUTOHSCROLL as u32);
    create_child(parent, font, w!("EDIT"), style_bits, id, rect)
}

fn create_button(parent: HWND, font: HFONT, id: i32, label: &str, rect: Rect) -> Option<HWND> {
    let style_bits = WS_TABSTOP.0 | (BS_PUSHBUTTON as u32);
    let hwnd = create_child(parent, font, w!("BUTTON"), style_bits, id, rect)?;
    set_control_text(hwnd, label);
    Some(hwnd)
}

fn create_label(parent: HWND, font: HFONT, id: i32, rect: Rect) -> Option<HWND> {
    create_child(parent, font, w!("STATIC"), 0, id, rect)
}

fn read_control_text(hwnd: HWND) -> String {
    unsafe {
        let length = GetWindowTextLengthW(hwnd);
        if length <= 0 {
            return String::new();
        }
        let mut buffer = vec![0u16; length as usize + 1];
        let copied = GetWindowTextW(hwnd, &mut buffer).max(0) as usize;
        String::from_utf16_lossy(&buffer[..copied])
    }
}

fn set_control_text(hwnd: HWND, text: &str) {
    let wide = to_wstring(text);
    unsafe {
        let _ = SetWindowTextW(hwnd, PCWSTR(wide.as_ptr()));
    }
}

fn to_wstring(input: &str) -> Vec<u16> {
    input.encode_utf16().chain(std::iter::once(0)).collect()
}
