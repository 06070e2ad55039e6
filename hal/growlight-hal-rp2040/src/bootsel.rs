//! Reboot into the RP2040 ROM bootloader

/// Reset into USB mass-storage boot mode so a new UF2 can be dropped on
///
/// Never returns.
pub fn reboot_to_bootloader() -> ! {
    embassy_rp::rom_data::reset_to_usb_boot(0, 0);
    loop {
        cortex_m::asm::nop();
    }
}
