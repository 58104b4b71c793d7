use rand::Rng;

use crate::constants::{FLAG_REGISTER, SPRITE_HEIGHT, SPRITE_SHEET_START};
use crate::error::Result;
use crate::state::State;

// Handlers that compute a flag write Vx first and VF last, so VF holds the flag
// even when x is 0xF.

/// clear
pub fn cls(state: &mut State) {
    state.frame_buffer.clear();
    state.draw_flag = true;
    state.advance();
}

/// PC = STACK.pop() + 2
pub fn ret(state: &mut State) -> Result<()> {
    state.pc = state.pop()?;
    state.advance();
    Ok(())
}

/// PC = nnn
pub fn jump(state: &mut State, nnn: u16) {
    state.pc = nnn;
}

/// STACK.push(PC); PC = nnn
pub fn call(state: &mut State, nnn: u16) -> Result<()> {
    state.push_pc()?;
    state.pc = nnn;
    Ok(())
}

/// if Vx == nn then skip
pub fn ske(state: &mut State, x: u8, nn: u8) {
    let condition = state.v[usize::from(x)] == nn;
    state.skip_if(condition);
}

/// if Vx != nn then skip
pub fn skne(state: &mut State, x: u8, nn: u8) {
    let condition = state.v[usize::from(x)] != nn;
    state.skip_if(condition);
}

/// if Vx == Vy then skip
pub fn skre(state: &mut State, x: u8, y: u8) {
    let condition = state.v[usize::from(x)] == state.v[usize::from(y)];
    state.skip_if(condition);
}

/// if Vx != Vy then skip
pub fn skrne(state: &mut State, x: u8, y: u8) {
    let condition = state.v[usize::from(x)] != state.v[usize::from(y)];
    state.skip_if(condition);
}

/// Vx = nn
pub fn load(state: &mut State, x: u8, nn: u8) {
    state.v[usize::from(x)] = nn;
    state.advance();
}

/// Vx += nn
/// Overflow wraps and VF is left alone
pub fn add(state: &mut State, x: u8, nn: u8) {
    let x = usize::from(x);
    state.v[x] = state.v[x].wrapping_add(nn);
    state.advance();
}

/// Vx = Vy
pub fn mv(state: &mut State, x: u8, y: u8) {
    state.v[usize::from(x)] = state.v[usize::from(y)];
    state.advance();
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8) {
    state.v[usize::from(x)] |= state.v[usize::from(y)];
    state.advance();
}

/// Vx &= Vy
pub fn and(state: &mut State, x: u8, y: u8) {
    state.v[usize::from(x)] &= state.v[usize::from(y)];
    state.advance();
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: u8, y: u8) {
    state.v[usize::from(x)] ^= state.v[usize::from(y)];
    state.advance();
}

/// Vx += Vy; VF = carry
pub fn addr(state: &mut State, x: u8, y: u8) {
    let (x, y) = (usize::from(x), usize::from(y));
    let (res, carry) = state.v[x].overflowing_add(state.v[y]);
    state.v[x] = res;
    state.v[FLAG_REGISTER] = u8::from(carry);
    state.advance();
}

/// Vx -= Vy; VF = !borrow
pub fn sub(state: &mut State, x: u8, y: u8) {
    let (x, y) = (usize::from(x), usize::from(y));
    let (res, borrow) = state.v[x].overflowing_sub(state.v[y]);
    state.v[x] = res;
    state.v[FLAG_REGISTER] = u8::from(!borrow);
    state.advance();
}

/// Vx >>= 1; VF = shifted out bit
pub fn shr(state: &mut State, x: u8) {
    let x = usize::from(x);
    let lsb = state.v[x] & 0x1;
    state.v[x] >>= 1;
    state.v[FLAG_REGISTER] = lsb;
    state.advance();
}

/// Vx = Vy - Vx; VF = !borrow
pub fn subn(state: &mut State, x: u8, y: u8) {
    let (x, y) = (usize::from(x), usize::from(y));
    let (res, borrow) = state.v[y].overflowing_sub(state.v[x]);
    state.v[x] = res;
    state.v[FLAG_REGISTER] = u8::from(!borrow);
    state.advance();
}

/// Vx <<= 1; VF = shifted out bit
pub fn shl(state: &mut State, x: u8) {
    let x = usize::from(x);
    let msb = state.v[x] >> 7;
    state.v[x] <<= 1;
    state.v[FLAG_REGISTER] = msb;
    state.advance();
}

/// I = nnn
pub fn loadi(state: &mut State, nnn: u16) {
    state.i = nnn;
    state.advance();
}

/// PC = V0 + nnn
pub fn jumpi(state: &mut State, nnn: u16) {
    state.pc = u16::from(state.v[0x0]) + nnn;
}

/// Vx = rand_byte & nn
pub fn rand<R: Rng + ?Sized>(state: &mut State, x: u8, nn: u8, rng: &mut R) {
    let rand_byte: u8 = rng.gen();
    state.v[usize::from(x)] = rand_byte & nn;
    state.advance();
}

/// draw_sprite(x=Vx y=Vy height=n+1)
/// XORs the sprite in memory I..=I+n at position (Vx, Vy) on the FrameBuffer with wrapping.
/// Sets VF if any pixels were erased
pub fn draw(state: &mut State, x: u8, y: u8, n: u8) -> Result<()> {
    let height = usize::from(n) + 1;
    let mut sprite = [0; 0x10];
    sprite[..height].copy_from_slice(state.memory(state.i, height)?);

    let px = usize::from(state.v[usize::from(x)]);
    let py = usize::from(state.v[usize::from(y)]);
    let collision = state.frame_buffer.draw_sprite(px, py, &sprite[..height]);

    state.v[FLAG_REGISTER] = u8::from(collision);
    state.draw_flag = true;
    state.advance();
    Ok(())
}

/// if Vx.pressed then skip
pub fn skpr(state: &mut State, x: u8) {
    let condition = state.keypad.is_pressed(state.v[usize::from(x)]);
    state.skip_if(condition);
}

/// if !Vx.pressed then skip
pub fn skup(state: &mut State, x: u8) {
    let condition = !state.keypad.is_pressed(state.v[usize::from(x)]);
    state.skip_if(condition);
}

/// Vx = DT
pub fn moved(state: &mut State, x: u8) {
    state.v[usize::from(x)] = state.timers.delay;
    state.advance();
}

/// await keypress for Vx
/// The pc stays put until a key is down, so this is re-executed every cycle.
pub fn keyd(state: &mut State, x: u8) {
    if let Some(key) = state.keypad.first_pressed() {
        state.v[usize::from(x)] = key;
        state.advance();
    }
}

/// DT = Vx
pub fn loadd(state: &mut State, x: u8) {
    state.timers.delay = state.v[usize::from(x)];
    state.advance();
}

/// ST = Vx
pub fn loads(state: &mut State, x: u8) {
    state.timers.sound = state.v[usize::from(x)];
    state.advance();
}

/// I += Vx; VF = I + Vx > 0xFF
/// The flag only checks for overflow of the low byte.
pub fn addi(state: &mut State, x: u8) {
    let vx = u16::from(state.v[usize::from(x)]);
    let overflow = u32::from(state.i) + u32::from(vx) > 0x00FF;
    state.i = state.i.wrapping_add(vx);
    state.v[FLAG_REGISTER] = u8::from(overflow);
    state.advance();
}

/// I = Vx * 5
/// Set I to the memory address of the sprite for Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(state: &mut State, x: u8) {
    state.i = SPRITE_SHEET_START + u16::from(state.v[usize::from(x)]) * SPRITE_HEIGHT;
    state.advance();
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address I
pub fn bcd(state: &mut State, x: u8) -> Result<()> {
    let vx = state.v[usize::from(x)];
    let bcd = [vx / 100, vx / 10 % 10, vx % 10];
    state.memory_mut(state.i, 3)?.copy_from_slice(&bcd);
    state.advance();
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(state: &mut State, x: u8) -> Result<()> {
    let x = usize::from(x);
    let registers = state.v;
    state
        .memory_mut(state.i, x + 1)?
        .copy_from_slice(&registers[..=x]);
    state.advance();
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(state: &mut State, x: u8) -> Result<()> {
    let x = usize::from(x);
    let mut registers = state.v;
    registers[..=x].copy_from_slice(state.memory(state.i, x + 1)?);
    state.v = registers;
    state.advance();
    Ok(())
}
