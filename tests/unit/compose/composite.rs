use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    let src = vec![0u8; 4];
    assert!(over_in_place(&mut dst, &src).is_err());

    let mut odd = vec![0u8; 6];
    let src = vec![0u8; 6];
    assert!(over_in_place(&mut odd, &src).is_err());
}

#[test]
fn premultiply_scales_color_channels() {
    let mut px = vec![100u8, 50, 200, 128];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(
        px,
        vec![
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );
}

#[test]
fn premultiply_zero_alpha_clears_color() {
    let mut px = vec![9u8, 9, 9, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![0, 0, 0, 0]);
}

#[test]
fn layer_from_premul_validates_length() {
    assert!(Layer::from_premul(2, 2, vec![0; 16]).is_ok());
    assert!(Layer::from_premul(2, 2, vec![0; 15]).is_err());
}

#[test]
fn layer_over_rejects_size_mismatch() {
    let mut a = Layer::transparent(2, 2);
    let b = Layer::transparent(3, 2);
    assert!(a.over(&b).is_err());
}

#[test]
fn blit_clips_out_of_bounds() {
    let mut dst = Layer::transparent(4, 4);
    let src = Layer {
        width: 2,
        height: 2,
        data: vec![255; 16],
    };
    dst.blit(&src, 3, 3);
    // Only the overlapping pixel landed.
    let i = (3 * 4 + 3) * 4;
    assert_eq!(&dst.data[i..i + 4], &[255, 255, 255, 255]);
    assert_eq!(dst.data.iter().filter(|&&b| b == 255).count(), 4);
}

#[test]
fn flatten_unpremultiplies_translucent_pixels() {
    let layer = Layer {
        width: 2,
        height: 1,
        data: vec![128, 64, 0, 128, 10, 20, 30, 255],
    };
    let rgb = layer.flatten_rgb().unwrap();
    assert_eq!(rgb.dimensions(), (2, 1));
    // 128/128 scaled back to 255, 64/128 to ~127.
    let p0 = rgb.get_pixel(0, 0);
    assert_eq!(p0[0], 255);
    assert!((126..=128).contains(&p0[1]));
    assert_eq!(rgb.get_pixel(1, 0), &image::Rgb([10, 20, 30]));
}
