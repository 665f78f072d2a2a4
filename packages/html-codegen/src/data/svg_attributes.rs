//! Vector-graphics attributes. Several entries (`Core`, `Styling`, `Presentation`, ...)
//! name attribute groups rather than single attributes and are emitted as raw setters.

use super::{attr, RawAttribute};

#[rustfmt::skip]
pub(crate) const SVG_ATTRIBUTES: &[RawAttribute] = &[
    attr("filterRes", "Filterres", "attr|value", "Deprecated: This feature is no longer recommended. Though some browsers might still support it, it may have already been removed from the relevant web standards, may be in the process of being dropped, or may only be kept for compatibility purposes. Avoid using it, and update existing code if possible; see the compatibility table at the bottom of this page to guide your decision. Be aware that this feature may cease to work at any time."),
    attr("pointsAtY", "Pointsaty", "string", "The pointsAtY attribute represents the y location in the coordinate system established by attribute primitiveUnits on the <filter> element of the point at which the light source is pointing."),
    attr("dy", "Dy", "string", "The dy attribute indicates a shift along the y-axis on the position of an element or its content."),
    attr("marker-start", "MarkerStart", "string", "The marker-start attribute defines the arrowhead or polymarker that will be drawn at the first vertex of the given shape.").rename("marker-start"),
    attr("font-stretch", "FontStretch", "attr|value", "The font-stretch attribute indicates the desired amount of condensing or expansion in the glyphs used to render the text.").rename("font-stretch"),
    attr("contentScriptType", "Contentscripttype", "attr|value", "Deprecated: This feature is no longer recommended. Though some browsers might still support it, it may have already been removed from the relevant web standards, may be in the process of being dropped, or may only be kept for compatibility purposes. Avoid using it, and update existing code if possible; see the compatibility table at the bottom of this page to guide your decision. Be aware that this feature may cease to work at any time."),
    attr("d", "D", "string", "The d attribute defines a path to be drawn."),
    attr("k1", "K1", "string", "The k1 attribute defines one of the values to be used within the arithmetic operation of the <feComposite> filter primitive."),
    attr("Styling", "Styling", "attr|value", "The SVG styling attributes are all the attributes that can be specified on any SVG element to apply CSS styling effects."),
    attr("x", "X", "string", "The x attribute defines an x-axis coordinate in the user coordinate system."),
    attr("cx", "Cx", "string", "The cx attribute define the x-axis coordinate of a center point."),
    attr("surfaceScale", "Surfacescale", "string", "The surfaceScale attribute represents the height of the surface for a light filter primitive."),
    attr("side", "Side", "string", "Experimental: This is an experimental technologyCheck the Browser compatibility table carefully before using this in production."),
    attr("values", "Values", "attr|value", "The values attribute has different meanings, depending upon the context where it's used, either it defines a sequence of values used over the course of an animation, or it's a list of numbers for a color matrix, which is interpreted differently depending on the type of color change to be performed."),
    attr("target", "Target", "string", "The target attribute should be used when there are multiple possible targets for the ending resource, such as when the parent document is embedded within an HTML or XHTML document, or is viewed with a tabbed browser. This attribute specifies the name of the browsing context (e.g., a browser tab or an (X)HTML iframe or object element) into which a document is to be opened when the link is activated:"),
    attr("clipPathUnits", "Clippathunits", "string", "The clipPathUnits attribute indicates which coordinate system to use for the contents of the <clipPath> element."),
    attr("id", "Id", "string", "The id attribute assigns a unique name to an element."),
    attr("x2", "X2", "string", "The x2 attribute is used to specify the second x-coordinate for drawing an SVG element that requires more than one coordinate. Elements that only need one coordinate use the x attribute instead."),
    attr("specularConstant", "Specularconstant", "string", "The specularConstant attribute controls the ratio of reflection of the specular lighting. It represents the ks value in the Phong lighting model. The bigger the value the stronger the reflection."),
    attr("accumulate", "Accumulate", "attr|value", "The accumulate attribute controls whether or not an animation is cumulative."),
    attr("edgeMode", "Edgemode", "attr|value", "The edgeMode attribute determines how to extend the input image as necessary with color values so that the matrix operations can be applied when the kernel is positioned at or near the edge of the input image."),
    attr("pointer-events", "PointerEvents", "string", "The pointer-events attribute is a presentation attribute that allows defining whether or when an element may be the target of a mouse event.").rename("pointer-events"),
    attr("rx", "Rx", "string", "The rx attribute defines a radius on the x-axis."),
    attr("pointsAtX", "Pointsatx", "string", "The pointsAtX attribute represents the x location in the coordinate system established by attribute primitiveUnits on the <filter> element of the point at which the light source is pointing."),
    attr("lengthAdjust", "Lengthadjust", "string", "The lengthAdjust attribute controls how the text is stretched into the length defined by the textLength attribute."),
    attr("kernelMatrix", "Kernelmatrix", "string", "The kernelMatrix attribute defines the list of numbers that make up the kernel matrix for the <feConvolveMatrix> element."),
    attr("opacity", "Opacity", "string", "The opacity attribute specifies the transparency of an object or of a group of objects, that is, the degree to which the background behind the element is overlaid."),
    attr("calcMode", "Calcmode", "attr|value", "The calcMode attribute specifies the interpolation mode for the animation."),
    attr("marker-mid", "MarkerMid", "string", "The marker-mid attribute defines the arrowhead or polymarker that will be drawn at all interior vertices of the given shape.").rename("marker-mid"),
    attr("k2", "K2", "string", "The k2 attribute defines one of the values to be used within the arithmetic operation of the <feComposite> filter primitive."),
    attr("pointsAtZ", "Pointsatz", "string", "The pointsAtZ attribute represents the y location in the coordinate system established by attribute primitiveUnits on the <filter> element of the point at which the light source is pointing, assuming that, in the initial local coordinate system, the positive z-axis comes out towards the person viewing the content and assuming that one unit along the z-axis equals one unit in x and y."),
    attr("result", "Result", "string", "The result attribute defines the assigned name for this filter primitive. If supplied, then graphics that result from processing this filter primitive can be referenced by an in attribute on a subsequent filter primitive within the same <filter> element. If no value is provided, the output will only be available for re-use as the implicit input into the next filter primitive if that filter primitive provides no value for its in attribute."),
    attr("text-anchor", "TextAnchor", "string", "The text-anchor attribute is used to align (start-, middle- or end-alignment) a string of pre-formatted text or auto-wrapped text where the wrapping area is determined from the inline-size property relative to a given point.").rename("text-anchor"),
    attr("maskUnits", "Maskunits", "string", "The maskUnits attribute indicates which coordinate system to use for the geometry properties of the <mask> element."),
    attr("path", "Path", "string", "The path attribute has two different meanings, either it defines a text path along which the characters of a text are rendered, or a motion path along which a referenced element is animated."),
    attr("stroke-width", "StrokeWidth", "string", "The stroke-width attribute is a presentation attribute defining the width of the stroke to be applied to the shape.").rename("stroke-width"),
    attr("seed", "Seed", "string", "The seed attribute represents the starting number for the pseudo random number generator of the <feTurbulence> filter primitive."),
    attr("operator", "Operator", "string", "The operator attribute has two meanings based on the context it's used in. Either it defines the compositing or morphing operation to be performed."),
    attr("dominant-baseline", "DominantBaseline", "string", "The dominant-baseline attribute specifies the dominant baseline, which is the baseline used to align the box's text and inline-level contents. It also indicates the default alignment baseline of any boxes participating in baseline alignment in the box's alignment context.").rename("dominant-baseline"),
    attr("crossorigin", "Crossorigin", "string", "The crossorigin attribute, valid on the <image> element, provides support for CORS, defining how the element handles crossorigin requests, thereby enabling the configuration of the CORS requests for the element's fetched data. It is a CORS settings attribute."),
    attr("cy", "Cy", "string", "The cy attribute define the y-axis coordinate of a center point."),
    attr("viewBox", "Viewbox", "string", "The viewBox attribute defines the position and dimension, in user space, of an SVG viewport."),
    attr("radius", "Radius", "attr|value", "The radius attribute represents the radius (or radii) for the operation on a given <feMorphology> filter primitive."),
    attr("repeatCount", "Repeatcount", "string", "The repeatCount attribute indicates the number of times an animation will take place."),
    attr("order", "Order", "string", "The order attribute indicates the size of the matrix to be used by a <feConvolveMatrix> element."),
    attr("repeatDur", "Repeatdur", "string", "The repeatDur attribute specifies the total duration for repeating an animation."),
    attr("elevation", "Elevation", "string", "The elevation attribute specifies the direction angle for the light source from the XY plane towards the Z-axis, in degrees. Note that the positive Z-axis points towards the viewer of the content."),
    attr("flood-color", "FloodColor", "string", "The flood-color attribute indicates what color to use to flood the current filter primitive subregion.").rename("flood-color"),
    attr("xChannelSelector", "Xchannelselector", "string", "The xChannelSelector attribute indicates which color channel from in2 to use to displace the pixels in in along the x-axis."),
    attr("transform", "Transform", "string", "The transform attribute defines a list of transform definitions that are applied to an element and the element's children."),
    attr("keyTimes", "Keytimes", "string", "The keyTimes attribute represents a list of time values used to control the pacing of the animation."),
    attr("href", "Href", "string", "The href attribute defines a link to a resource as a reference URL. The exact meaning of that link depends on the context of each element using it."),
    attr("patternTransform", "Patterntransform", "string", "The patternTransform attribute defines a list of transform definitions that are applied to a pattern tile."),
    attr("scale", "Scale", "string", "The scale attribute defines the displacement scale factor to be used on a <feDisplacementMap> filter primitive. The amount is expressed in the coordinate system established by the primitiveUnits attribute on the <filter> element."),
    attr("keyPoints", "Keypoints", "string", "The keyPoints attribute indicates the simple duration of an animation."),
    attr("kernelUnitLength", "Kernelunitlength", "attr|value", "Deprecated: This feature is no longer recommended. Though some browsers might still support it, it may have already been removed from the relevant web standards, may be in the process of being dropped, or may only be kept for compatibility purposes. Avoid using it, and update existing code if possible; see the compatibility table at the bottom of this page to guide your decision. Be aware that this feature may cease to work at any time."),
    attr("baseFrequency", "Basefrequency", "string", "The baseFrequency attribute represents the base frequency parameter for the noise function of the <feTurbulence> filter primitive."),
    attr("in#workaround_for_backgroundimage", "In#Workaround_for_backgroundimage", "attr|value", "The in attribute identifies input for the given filter primitive."),
    attr("style", "Style", "string", "The style attribute allows to style an element using CSS declarations. It functions identically to the style attribute in HTML."),
    attr("color", "Color", "string", "The color attribute is used to provide a potential indirect value, currentcolor, for the fill, stroke, stop-color, flood-color, and lighting-color attributes."),
    attr("in", "In", "string", "The in attribute identifies input for the given filter primitive."),
    attr("preserveAspectRatio", "Preserveaspectratio", "string", "The preserveAspectRatio attribute indicates how an element with a viewBox providing a given aspect ratio must fit into a viewport with a different aspect ratio."),
    attr("Core", "Core", "attr|value", "The SVG core attributes are all the common attributes that can be specified on any SVG element."),
    attr("maskContentUnits", "Maskcontentunits", "string", "The maskContentUnits attribute indicates which coordinate system to use for the contents of the <mask> element."),
    attr("width", "Width", "string", "The width attribute defines the horizontal length of an element in the user coordinate system."),
    attr("patternContentUnits", "Patterncontentunits", "string", "The patternContentUnits attribute indicates which coordinate system to use for the contents of the <pattern> element."),
    attr("method", "Method", "attr|value", "Experimental: This is an experimental technologyCheck the Browser compatibility table carefully before using this in production."),
    attr("spacing", "Spacing", "attr|value", "The spacing attribute indicates how the user agent should determine the spacing between typographic characters that are to be rendered along a path."),
    attr("primitiveUnits", "Primitiveunits", "attr|value", "The primitiveUnits attribute specifies the coordinate system for the various length values within the filter primitives and for the attributes that define the filter primitive subregion."),
    attr("fill-rule", "FillRule", "string", "The fill-rule attribute is a presentation attribute defining the algorithm to use to determine the inside part of a shape.").rename("fill-rule"),
    attr("specularExponent", "Specularexponent", "string", "The specularExponent attribute controls the focus for the light source. The bigger the value the brighter the light."),
    attr("markerUnits", "Markerunits", "attr|value", "The markerUnits attribute defines the coordinate system for the markerWidth and markerHeight attributes and the contents of the <marker>."),
    attr("refY", "Refy", "attr|value", "The refY attribute defines the y coordinate of an element's reference point."),
    attr("version", "Version", "string", "Deprecated: This feature is no longer recommended. Though some browsers might still support it, it may have already been removed from the relevant web standards, may be in the process of being dropped, or may only be kept for compatibility purposes. Avoid using it, and update existing code if possible; see the compatibility table at the bottom of this page to guide your decision. Be aware that this feature may cease to work at any time."),
    attr("font-size-adjust", "FontSizeAdjust", "string", "The font-size-adjust attribute allows authors to specify an aspect value for an element that will preserve the x-height of the first choice font in a substitute font.").rename("font-size-adjust"),
    attr("systemLanguage", "Systemlanguage", "string", "The systemLanguage attribute represents a list of supported language tags. This list is matched against the language defined in the user preferences."),
    attr("stroke-linejoin", "StrokeLinejoin", "string", "The stroke-linejoin attribute is a presentation attribute defining the shape to be used at the corners of paths when they are stroked.").rename("stroke-linejoin"),
    attr("cursor", "Cursor", "attr|value", "SVG Attribute reference home"),
    attr("viewTarget", "Viewtarget", "attr|value", "Deprecated: This feature is no longer recommended. Though some browsers might still support it, it may have already been removed from the relevant web standards, may be in the process of being dropped, or may only be kept for compatibility purposes. Avoid using it, and update existing code if possible; see the compatibility table at the bottom of this page to guide your decision. Be aware that this feature may cease to work at any time."),
    attr("r", "R", "string", "The r attribute defines the radius of a circle."),
    attr("stroke-dasharray", "StrokeDasharray", "string", "The stroke-dasharray attribute is a presentation attribute defining the pattern of dashes and gaps used to paint the outline of the shape;").rename("stroke-dasharray"),
    attr("Events#global_event_attributes", "Events#Global_event_attributes", "attr|value", "Event attributes always have their name starting with \"on\" followed by the name of the event for which they are intended. They specifies some script to run when the event of the given type is dispatched to the element on which the attributes are specified."),
    attr("To", "To", "attr|value", "The to attribute indicates the final value of the attribute that will be modified during the animation."),
    attr("markerHeight", "Markerheight", "attr|value", "The markerHeight attribute represents the height of the viewport into which the <marker> is to be fitted when it is rendered according to the viewBox and preserveAspectRatio attributes."),
    attr("stdDeviation", "Stddeviation", "string", "The stdDeviation attribute defines the standard deviation for the blur operation."),
    attr("rotate", "Rotate", "string", "The rotate attribute specifies how the animated element rotates as it travels along a path specified in an <animateMotion> element."),
    attr("Events#animation_event_attributes", "Events#Animation_event_attributes", "attr|value", "Event attributes always have their name starting with \"on\" followed by the name of the event for which they are intended. They specifies some script to run when the event of the given type is dispatched to the element on which the attributes are specified."),
    attr("font-variant", "FontVariant", "string", "The font-variant attribute indicates whether the text is to be rendered using variations of the font's glyphs.").rename("font-variant"),
    attr("zoomAndPan", "Zoomandpan", "string", "Deprecated: This feature is no longer recommended. Though some browsers might still support it, it may have already been removed from the relevant web standards, may be in the process of being dropped, or may only be kept for compatibility purposes. Avoid using it, and update existing code if possible; see the compatibility table at the bottom of this page to guide your decision. Be aware that this feature may cease to work at any time."),
    attr("bias", "Bias", "attr|value", "The bias attribute shifts the range of the filter. After applying the kernelMatrix of the <feConvolveMatrix> element to the input image to yield a number and applied the divisor attribute, the bias attribute is added to each component. This allows representation of values that would otherwise be clamped to 0 or 1."),
    attr("contentStyleType", "Contentstyletype", "attr|value", "Deprecated: This feature is no longer recommended. Though some browsers might still support it, it may have already been removed from the relevant web standards, may be in the process of being dropped, or may only be kept for compatibility purposes. Avoid using it, and update existing code if possible; see the compatibility table at the bottom of this page to guide your decision. Be aware that this feature may cease to work at any time."),
    attr("dx", "Dx", "string", "The dx attribute indicates a shift along the x-axis on the position of an element or its content."),
    attr("min", "Min", "string", "The min attribute specifies the minimum value of the active animation duration."),
    attr("orient", "Orient", "string", "The orient attribute indicates how a marker is rotated when it is placed at its position on the shape."),
    attr("mode", "Mode", "string", "The mode attribute defines the blending mode on the <feBlend> filter primitive."),
    attr("k3", "K3", "string", "The k3 attribute defines one of the values to be used within the arithmetic operation of the <feComposite> filter primitive."),
    attr("preserveAlpha", "Preservealpha", "string", "the preserveAlpha attribute indicates how a <feConvolveMatrix> element handles alpha transparency."),
    attr("patternUnits", "Patternunits", "string", "The patternUnits attribute indicates which coordinate system to use for the geometry properties of the <pattern> element."),
    attr("font-style", "FontStyle", "string", "The font-style attribute specifies whether the text is to be rendered using a normal, italic, or oblique face.").rename("font-style"),
    attr("stop-color", "StopColor", "attr|value", "The stop-color attribute indicates what color to use at a gradient stop.").rename("stop-color"),
    attr("z", "Z", "string", "The z attribute defines the location along the z-axis for a light source in the coordinate system established by the primitiveUnits attribute on the <filter> element, assuming that, in the initial coordinate system, the positive z-axis comes out towards the person viewing the content and assuming that one unit along the z-axis equals one unit in x and y."),
    attr("baseProfile", "Baseprofile", "string", "Deprecated: This feature is no longer recommended. Though some browsers might still support it, it may have already been removed from the relevant web standards, may be in the process of being dropped, or may only be kept for compatibility purposes. Avoid using it, and update existing code if possible; see the compatibility table at the bottom of this page to guide your decision. Be aware that this feature may cease to work at any time."),
    attr("points", "Points", "string", "The points attribute defines a list of points. Each point is defined by a pair of number representing a X and a Y coordinate in the user coordinate system. If the attribute contains an odd number of coordinates, the last one will be ignored."),
    attr("attributeName", "Attributename", "string", "The attributeName attribute indicates the name of the CSS property or attribute of the target element that is going to be changed during an animation."),
    attr("Events#document_event_attributes", "Events#Document_event_attributes", "attr|value", "Event attributes always have their name starting with \"on\" followed by the name of the event for which they are intended. They specifies some script to run when the event of the given type is dispatched to the element on which the attributes are specified."),
    attr("begin", "Begin", "string", "The begin attribute defines when an animation should begin or when an element should be discarded."),
    attr("targetX", "Targetx", "attr|value", "The targetX attribute determines the positioning in horizontal direction of the convolution matrix relative to a given target pixel in the input image. The leftmost column of the matrix is column number zero. The value must be such that: 0 <= targetX < order X."),
    attr("Events#document_element_event_attributes", "Events#Document_element_event_attributes", "attr|value", "Event attributes always have their name starting with \"on\" followed by the name of the event for which they are intended. They specifies some script to run when the event of the given type is dispatched to the element on which the attributes are specified."),
    attr("x1", "X1", "string", "The x1 attribute is used to specify the first x-coordinate for drawing an SVG element that requires more than one coordinate. Elements that only need one coordinate use the x attribute instead."),
    attr("Events#graphical_event_attributes", "Events#Graphical_event_attributes", "attr|value", "Event attributes always have their name starting with \"on\" followed by the name of the event for which they are intended. They specifies some script to run when the event of the given type is dispatched to the element on which the attributes are specified."),
    attr("color-interpolation", "ColorInterpolation", "attr|value", "The color-interpolation attribute specifies the color space for gradient interpolations, color animations, and alpha compositing.").rename("color-interpolation"),
    attr("refX", "Refx", "attr|value", "The refX attribute defines the x coordinate of an element's reference point."),
    attr("k4", "K4", "string", "The k4 attribute defines one of the values to be used within the arithmetic operation of the <feComposite> filter primitive."),
    attr("Presentation", "Presentation", "attr|value", "SVG presentation attributes are CSS properties that can be used as attributes on SVG elements."),
    attr("stroke-opacity", "StrokeOpacity", "string", "The stroke-opacity attribute is a presentation attribute defining the opacity of the paint server (color, gradient, pattern, etc.) applied to the stroke of a shape.").rename("stroke-opacity"),
    attr("limitingConeAngle", "Limitingconeangle", "string", "The limitingConeAngle attribute represents the angle in degrees between the spot light axis (i.e. the axis between the light source and the point to which it is pointing at) and the spot light cone. So it defines a limiting cone which restricts the region where the light is projected. No light is projected outside the cone."),
    attr("additive", "Additive", "attr|value", "The additive attribute controls whether or not an animation is additive."),
    attr("stop-opacity", "StopOpacity", "attr|value", "The stop-opacity attribute defines the opacity of a given color gradient stop.").rename("stop-opacity"),
    attr("requiredFeatures", "Requiredfeatures", "string", "Deprecated: This feature is no longer recommended. Though some browsers might still support it, it may have already been removed from the relevant web standards, may be in the process of being dropped, or may only be kept for compatibility purposes. Avoid using it, and update existing code if possible; see the compatibility table at the bottom of this page to guide your decision. Be aware that this feature may cease to work at any time."),
    attr("clip-path", "ClipPath", "string", "The clip-path presentation attribute defines or associates a clipping path with the element it is related to.").rename("clip-path"),
    attr("y2", "Y2", "string", "The y2 attribute is used to specify the second y-coordinate for drawing an SVG element that requires more than one coordinate. Elements that only need one coordinate use the y attribute instead."),
    attr("flood-opacity", "FloodOpacity", "string", "The flood-opacity attribute indicates the opacity value to use across the current filter primitive subregion.").rename("flood-opacity"),
    attr("type", "Type", "attr|value", "The type attribute is a generic attribute and it has different meaning based on the context in which it's used."),
    attr("keySplines", "Keysplines", "string", "The keySplines attribute defines a set of Bézier curve control points associated with the keyTimes list, defining a cubic Bézier function that controls interval pacing."),
    attr("class", "Class", "string", "« SVG Attribute reference home"),
    attr("stroke-dashoffset", "StrokeDashoffset", "string", "The stroke-dashoffset attribute is a presentation attribute defining an offset on the rendering of the associated dash array.").rename("stroke-dashoffset"),
    attr("y1", "Y1", "string", "The y1 attribute is used to specify the first y-coordinate for drawing an SVG element that requires more than one coordinate. Elements that only need one coordinate use the y attribute instead."),
    attr("pathLength", "Pathlength", "string", "The pathLength attribute lets authors specify a total length for the path, in user units. This value is then used to calibrate the browser's distance calculations with those of the author, by scaling all distance computations using the ratio pathLength / (computed value of path length)."),
    attr("diffuseConstant", "Diffuseconstant", "string", "The diffuseConstant attribute represents the kd value in the Phong lighting model. In SVG, this can be any non-negative number."),
    attr("stroke-miterlimit", "StrokeMiterlimit", "string", "The stroke-miterlimit attribute is a presentation attribute defining a limit on the ratio of the miter length to the stroke-width used to draw a miter join. When the limit is exceeded, the join is converted from a miter to a bevel.").rename("stroke-miterlimit"),
    attr("tabindex", "Tabindex", "string", "The tabindex attribute allows you to control whether an element is focusable and to define the relative order of the element for the purposes of sequential focus navigation."),
    attr("end", "End", "string", "The end attribute defines an end value for the animation that can constrain the active duration."),
    attr("startOffset", "Startoffset", "string", "The startOffset attribute defines an offset from the start of the path for the initial current text position along the path after converting the path to the <textPath> element's coordinate system."),
    attr("font-family", "FontFamily", "string", "The font-family attribute indicates which font family will be used to render the text, specified as a prioritized list of font family names and/or generic family names.").rename("font-family"),
    attr("targetY", "Targety", "attr|value", "The targetY attribute determines the positioning in vertical direction of the convolution matrix relative to a given target pixel in the input image. The topmost row of the matrix is row number zero. The value must be such that: 0 <= targetY < order Y."),
    attr("Conditional_Processing", "Conditional_processing", "attr|value", "The SVG conditional processing attributes are all the attributes that can be specified on some SVG elements to control whether or not the element on which it appears should be rendered."),
    attr("display", "Display", "string", "The display attribute lets you control the rendering of graphical or container elements."),
    attr("shape-rendering", "ShapeRendering", "string", "The shape-rendering attribute provides hints to the renderer about what tradeoffs to make when rendering shapes like paths, circles, or rectangles.").rename("shape-rendering"),
    attr("lang", "Lang", "string", "The lang attribute specifies the primary language used in contents and attributes containing text content of particular elements."),
    attr("by", "By", "string", "The by attribute specifies a relative offset value for an attribute that will be modified during an animation."),
    attr("filterUnits", "Filterunits", "attr|value", "The filterUnits attribute defines the coordinate system for the attributes x, y, width and height."),
    attr("divisor", "Divisor", "string", "The divisor attribute specifies the value by which the resulting number of applying the kernelMatrix of a <feConvolveMatrix> element to the input image color value is divided to yield the destination color value."),
    attr("max", "Max", "string", "The max attribute specifies the maximum value of the active animation duration."),
    attr("yChannelSelector", "Ychannelselector", "string", "The yChannelSelector attribute indicates which color channel from in2 to use to displace the pixels in in along the y-axis."),
    attr("stroke-linecap", "StrokeLinecap", "string", "The stroke-linecap attribute is a presentation attribute defining the shape to be used at the end of open subpaths when they are stroked.").rename("stroke-linecap"),
    attr("vector-effect", "VectorEffect", "string", "The vector-effect property specifies the vector effect to use when drawing an object. Vector effects are applied before any of the other compositing operations, i.e. filters, masks and clips.").rename("vector-effect"),
    attr("height", "Height", "string", "The height attribute defines the vertical length of an element in the user coordinate system."),
    attr("stitchTiles", "Stitchtiles", "string", "The stitchTiles attribute defines how the Perlin Noise tiles behave at the border."),
    attr("media", "Media", "string", "The media attribute specifies a media query that must be matched for a style sheet to apply."),
    attr("clip-rule", "ClipRule", "string", "« SVG Attribute reference home").rename("clip-rule"),
    attr("ry", "Ry", "string", "The ry attribute defines a radius on the y-axis."),
    attr("textLength", "Textlength", "string", "The textLength attribute, available on SVG <text> and <tspan> elements, lets you specify the width of the space into which the text will draw. The user agent will ensure that the text does not extend farther than that distance, using the method or methods specified by the lengthAdjust attribute. By default, only the spacing between characters is adjusted, but the glyph size can also be adjusted if you change lengthAdjust."),
    attr("dur", "Dur", "string", "The dur attribute indicates the simple duration of an animation."),
    attr("y", "Y", "string", "The y attribute defines a y-axis coordinate in the user coordinate system."),
    attr("numOctaves", "Numoctaves", "string", "The numOctaves attribute defines the number of octaves for the noise function of the <feTurbulence> primitive."),
    attr("restart", "Restart", "string", "The restart attribute specifies whether or not an animation can restart."),
    attr("fill", "Fill", "string", "The fill attribute has two different meanings. For shapes and text it's a presentation attribute that defines the color (or any SVG paint servers like gradients or patterns) used to paint the element; for animation it defines the final state of the animation."),
    attr("fill-opacity", "FillOpacity", "string", "The fill-opacity attribute is a presentation attribute defining the opacity of the paint server (color, gradient, pattern, etc.) applied to a shape.").rename("fill-opacity"),
    attr("filter", "Filter", "string", "The filter attribute specifies the filter effects defined by the <filter> element that shall be applied to its element."),
    attr("stroke", "Stroke", "string", "The stroke attribute is a presentation attribute defining the color (or any SVG paint servers like gradients or patterns) used to paint the outline of the shape;"),
    attr("marker-end", "MarkerEnd", "string", "The marker-end attribute defines the arrowhead or polymarker that will be drawn at the final vertex of the given shape.").rename("marker-end"),
    attr("markerWidth", "Markerwidth", "attr|value", "The markerWidth attribute represents the width of the viewport into which the <marker> is to be fitted when it is rendered according to the viewBox and preserveAspectRatio attributes."),
    attr("azimuth", "Azimuth", "string", "The azimuth attribute specifies the direction angle for the light source on the XY plane (clockwise), in degrees from the x axis."),
    attr("font-size", "FontSize", "string", "The font-size attribute refers to the size of the font from baseline to baseline when multiple lines of text are set solid in a multiline layout environment.").rename("font-size"),
    attr("mask", "Mask", "string", "The mask attribute is a presentation attribute mainly used to bind a given <mask> element with the element the attribute belongs to."),
    attr("visibility", "Visibility", "string", "The visibility attribute lets you control the visibility of graphical elements. With a value of hidden or collapse the current graphics element is invisible."),
    attr("From", "From", "attr|value", "The from attribute indicates the initial value of the attribute that will be modified during the animation."),
    attr("font-weight", "FontWeight", "string", "The font-weight attribute refers to the boldness or lightness of the glyphs used to render the text, relative to other fonts in the same font family.").rename("font-weight"),
    attr("in2", "In2", "attr|value", "The in2 attribute identifies the second input for the given filter primitive. It works exactly like the in attribute."),
    attr("color-rendering", "ColorRendering", "attr|value", "").rename("color-rendering"),
    attr("offset", "Offset", "attr|value", ""),
    attr("title", "Title", "attr|value", ""),
    attr("requiredExtensions", "Requiredextensions", "attr|value", ""),
];
