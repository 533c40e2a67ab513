use super::{constants::*, record::PixelFormat};
use core::fmt;

const FLAG_NAMES: [(u32, &str); 6] = [
    (DDPF_ALPHAPIXELS, "DDPF_ALPHAPIXELS"),
    (DDPF_ALPHA, "DDPF_ALPHA"),
    (DDPF_FOURCC, "DDPF_FOURCC"),
    (DDPF_RGB, "DDPF_RGB"),
    (DDPF_YUV, "DDPF_YUV"),
    (DDPF_LUMINANCE, "DDPF_LUMINANCE"),
];

/// Multi-line summary of the block, listing only the fields the flags make meaningful.
impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DDS pixel format:")?;
        writeln!(f, "    size          = {}", self.size())?;

        write!(f, "    flags         = ")?;
        let mut any = false;
        for (flag, name) in FLAG_NAMES {
            if self.flags().contains(flag) {
                if any {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                any = true;
            }
        }
        if !any {
            f.write_str("(none)")?;
        }
        writeln!(f)?;

        if self.has_fourcc() {
            writeln!(f, "    fourcc        = {}", self.four_cc())?;
        }
        if self.has_rgb() {
            writeln!(f, "    rgb_bit_count = {}", self.rgb_bit_count())?;
            writeln!(f, "    red_mask      = {:#010X}", self.red_mask())?;
            writeln!(f, "    green_mask    = {:#010X}", self.green_mask())?;
            writeln!(f, "    blue_mask     = {:#010X}", self.blue_mask())?;
            if self.has_alpha_pixels() {
                writeln!(f, "    alpha_mask    = {:#010X}", self.alpha_mask())?;
            }
        }
        write!(f, "    compression   = {}", self.compression())
    }
}
